// Copyright 2026 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A reading pane as a screen reader would see it.
//!
//! Builds a pane holding a document of three paragraphs and two buttons, then
//! plays the part of a bridge: it walks the tree, reads and searches the document
//! text, moves by paragraph, and invokes a button.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p attune_demos --example reading_pane`

use std::cell::Cell;
use std::rc::Rc;

use attune::{BuildError, Direction, EventSink, NodeId, TreeContext};
use attune_text::{TextPoint, TextRange, TextUnit};
use kurbo::Rect;
use tracing_subscriber::EnvFilter;

const PARAGRAPHS: [&str; 3] = [
    "This is the first paragraph.",
    "Hello, Dreamer of dreams.",
    "Yet another paragraph",
];

/// Prints what a platform bridge would announce.
struct Announcer<'a> {
    ctx: &'a TreeContext,
}

impl EventSink for Announcer<'_> {
    fn focus_changed(&mut self, id: NodeId) {
        let name = self.ctx.get_node(id).map_or("?", |n| n.name);
        println!("announce: focus -> {name}");
    }

    fn invoked(&mut self, id: NodeId) {
        let name = self.ctx.get_node(id).map_or("?", |n| n.name);
        println!("announce: invoked {name}");
    }
}

struct Ids {
    doc: NodeId,
    first: NodeId,
    close: NodeId,
}

fn describe(ctx: &mut TreeContext, running: &Rc<Cell<bool>>) -> Result<Ids, BuildError> {
    const WIDTH: f64 = 1200.0;
    const HEIGHT: f64 = 20.0;

    let mut frame = ctx.begin();
    let pane = frame.pane("Main")?;
    let doc = frame.document("Main")?;
    let mut y = 0.0;
    let mut first = NodeId::INVALID;
    for text in PARAGRAPHS {
        let id = frame.text(text)?;
        frame.set_rect(id, Rect::new(0.0, y, WIDTH, y + HEIGHT))?;
        y += HEIGHT;
        if !first.is_valid() {
            first = id;
        }
    }
    frame.close(doc)?;
    frame.set_rect(doc, Rect::new(0.0, 0.0, WIDTH, y))?;

    let minimize = frame.button("Minimize Application", || println!("(minimize requested)"))?;
    frame.set_rect(minimize, Rect::new(0.0, y, WIDTH, y + HEIGHT))?;
    y += HEIGHT;
    let stop = Rc::clone(running);
    let close = frame.button("Close Application", move || stop.set(false))?;
    frame.set_rect(close, Rect::new(0.0, y, WIDTH, y + HEIGHT))?;
    y += HEIGHT;
    frame.close(pane)?;
    frame.set_rect(pane, Rect::new(0.0, 0.0, WIDTH, y))?;

    if frame.context().get_focus().is_none() {
        frame.request_focus(first);
    }
    frame.end()?;
    Ok(Ids { doc, first, close })
}

fn main() -> Result<(), BuildError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let running = Rc::new(Cell::new(true));
    let mut ctx = TreeContext::default();
    let ids = describe(&mut ctx, &running)?;
    ctx.log_structure();
    let events = ctx.drain_events();
    events.notify(&mut Announcer { ctx: &ctx });

    // Walk the document's paragraphs through sibling links.
    let mut next = ctx.navigate(ids.doc, Direction::FirstChild);
    while let Some(id) = next {
        if let Some(node) = ctx.get_node(id) {
            println!("paragraph {id}: {:?} ({} chars)", node.name, node.text_len);
        }
        next = ctx.navigate(id, Direction::NextSibling);
    }

    // Read the whole document, then search it.
    if let Some(whole) = ctx.document_range(ids.doc) {
        println!("document text: {:?}", ctx.get_text(&whole));
        if let Some(hit) = ctx.find_text(&whole, "dreamer", false, true) {
            println!(
                "found {:?} in {:?}",
                ctx.get_text(&hit),
                ctx.enclosing_node(&hit).and_then(|id| ctx.get_node(id)).map(|n| n.name)
            );
        }
    }

    // Step through paragraphs the way "read next paragraph" would.
    let mut range = TextRange::degenerate(TextPoint::new(ids.first, 0));
    loop {
        match ctx.move_by_unit(&range, TextUnit::Paragraph, 1) {
            Ok((moved, 1)) => {
                println!("next paragraph: {:?}", ctx.get_text(&moved));
                range = moved;
            }
            Ok(_) => break,
            Err(err) => {
                println!("{err}");
                break;
            }
        }
    }
    if let Err(err) = ctx.expand_to_unit(&range, TextUnit::Word) {
        println!("word navigation: {err}");
    }

    // Rebuild with nothing changed: same ids, focus kept, nothing to announce.
    let again = describe(&mut ctx, &running)?;
    assert_eq!(again.first, ids.first);
    assert!(ctx.drain_events().is_empty());

    ctx.activate(ids.close);
    let events = ctx.drain_events();
    events.notify(&mut Announcer { ctx: &ctx });
    println!("still running: {}", running.get());
    Ok(())
}
