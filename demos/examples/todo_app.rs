// Copyright 2026 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An immediate-mode app driven by synthetic key presses.
//!
//! A toggle button shows or hides a paragraph. The toggle keeps its id while its
//! label flips between "Show Content" and "Hide Content", and focus follows the
//! content when it appears. Keys are fed through `attune_event_state`, the way a
//! window procedure would sample them.
//!
//! Run:
//! - `RUST_LOG=attune=debug cargo run -p attune_demos --example todo_app`

use std::cell::Cell;
use std::rc::Rc;

use attune::{BuildError, NodeId, TreeContext};
use attune_event_state::keyboard::{Key, Keyboard};
use tracing_subscriber::EnvFilter;

#[derive(Default)]
struct App {
    show_content: Rc<Cell<bool>>,
    /// Set by the toggle; the next rebuild moves focus to the content.
    just_shown: Rc<Cell<bool>>,
    done: Rc<Cell<bool>>,
    quit: Rc<Cell<bool>>,
    toggle: Option<NodeId>,
}

impl App {
    fn describe(&mut self, ctx: &mut TreeContext) -> Result<(), BuildError> {
        let mut frame = ctx.begin();
        let main = frame.pane("Main")?;

        let label = if self.show_content.get() {
            "Hide Content"
        } else {
            "Show Content"
        };
        let (show, shown) = (Rc::clone(&self.show_content), Rc::clone(&self.just_shown));
        let toggle = frame.button_with_text("Content Toggle", label, move || {
            show.set(!show.get());
            shown.set(show.get());
        })?;
        self.toggle = Some(toggle);

        if self.show_content.get() {
            let content = frame.text("Lorem ipsum...")?;
            if self.just_shown.replace(false) {
                frame.request_focus(content);
            }
            let done = Rc::clone(&self.done);
            frame.button("Done", move || done.set(true))?;
        }

        frame.text("You may close this app with the next button.")?;
        let quit = Rc::clone(&self.quit);
        frame.button("Close application.", move || quit.set(true))?;
        frame.close(main)?;
        frame.end()?;

        if self.done.replace(false) {
            self.show_content.set(false);
            // The toggle's label changes, so describe once more and refocus it.
            self.describe(ctx)?;
            ctx.request_focus(toggle);
        }
        Ok(())
    }
}

fn report(ctx: &mut TreeContext) {
    let events = ctx.drain_events();
    if let Some(id) = events.focus_changed {
        let name = ctx.get_node(id).map_or("?", |n| n.name);
        println!("focus -> {name}");
    }
    for id in events.activated {
        let name = ctx.get_node(id).map_or("?", |n| n.name);
        println!("activated {name}");
    }
}

fn main() -> Result<(), BuildError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut ctx = TreeContext::default();
    let mut app = App::default();
    let mut keyboard = Keyboard::new();
    app.describe(&mut ctx)?;

    // Tab to the toggle, open the content, walk to "Done", press it, then quit.
    let script: &[&[Key]] = &[
        &[Key::Tab],
        &[],
        &[Key::Down],
        &[],
        &[Key::Enter],
        &[],
        &[Key::Down],
        &[],
        &[Key::Enter],
        &[],
        &[Key::Down],
        &[],
        &[Key::Down],
        &[],
        &[Key::Enter],
        &[],
    ];
    for held in script {
        keyboard.update(|k| held.contains(&k));
        ctx.handle_keyboard(&keyboard);
        report(&mut ctx);
        app.describe(&mut ctx)?;
        report(&mut ctx);
        keyboard.end_cycle();
        if app.quit.get() {
            println!("quit requested");
            break;
        }
    }
    ctx.log_structure();
    if let Some(toggle) = app.toggle {
        println!("toggle label: {:?}", ctx.get_node(toggle).map(|n| n.name));
    }
    Ok(())
}
