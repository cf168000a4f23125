//! Event loop tying terminal input to the list view.

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use log::{debug, info, warn};
use userlist_lib::ListView;
use userlist_lib::api::UserSource;
use userlist_lib::view::{Frame, ViewUpdate};

use crate::error::AppError;
use crate::keys::{Command, command_for};
use crate::screen::Screen;

const SPINNER_INTERVAL: Duration = Duration::from_millis(80);

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

enum Input {
    Terminal(Option<std::io::Result<Event>>),
    View(Option<ViewUpdate>),
    Tick,
}

/// Runs until the user quits or the input stream ends, then tears the view down.
pub async fn run<S: UserSource + 'static>(
    mut view: ListView<S>,
    screen: &mut Screen,
) -> Result<(), AppError> {
    let mut events = EventStream::new();
    let mut spinner = tokio::time::interval(SPINNER_INTERVAL);
    let mut tick = 0usize;

    view.mount();
    screen.draw(&Frame::derive(&view), tick)?;

    loop {
        let busy = view.loading() || view.search_loading();
        let input = tokio::select! {
            event = events.next() => Input::Terminal(event),
            update = view.process() => Input::View(update),
            _ = spinner.tick(), if busy => Input::Tick,
        };

        match input {
            Input::Terminal(None) => {
                info!("Input stream closed");
                break;
            }
            Input::Terminal(Some(Err(e))) => {
                view.teardown();
                return Err(e.into());
            }
            Input::Terminal(Some(Ok(Event::Key(key)))) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(command) = command_for(key) {
                    if apply(&mut view, command) == Flow::Quit {
                        break;
                    }
                }
            }
            Input::Terminal(Some(Ok(Event::Resize(width, height)))) => {
                debug!("Resized to {}x{}", width, height);
            }
            Input::Terminal(Some(Ok(_))) => continue,
            Input::View(None) => break,
            Input::View(Some(ViewUpdate::Discarded { seq })) => {
                debug!("Dropped stale response #{}", seq);
                continue;
            }
            Input::View(Some(_)) => {}
            Input::Tick => tick = tick.wrapping_add(1),
        }

        screen.draw(&Frame::derive(&view), tick)?;
    }

    view.teardown();
    Ok(())
}

/// Applies one command to the view.
pub fn apply<S: UserSource + 'static>(view: &mut ListView<S>, command: Command) -> Flow {
    debug!("Command {:?}", command);
    match command {
        Command::Quit => return Flow::Quit,
        Command::Type(c) => view.push_search_char(c),
        Command::Backspace => view.pop_search_char(),
        Command::ClearSearch => view.clear_search(),
        Command::PreviousPage => {
            view.previous_page();
        }
        Command::NextPage => {
            view.next_page();
        }
        Command::FirstPage => {
            view.go_to_page(1);
        }
        Command::LastPage => {
            let last = view.total_pages();
            view.go_to_page(last);
        }
        Command::GoToPage(page) => {
            if page <= view.total_pages() {
                view.go_to_page(page);
            } else {
                debug!("No page {}", page);
            }
        }
        Command::LimitUp => {
            let limit = view.store().limit().next();
            view.change_limit(limit);
        }
        Command::LimitDown => {
            let limit = view.store().limit().previous();
            view.change_limit(limit);
        }
        Command::Sort(index) => match view.store().columns().get(index).map(|c| c.field) {
            Some(field) => {
                view.toggle_sort(field);
            }
            None => warn!("No column {}", index),
        },
        Command::Retry => {
            view.retry();
        }
    }
    Flow::Continue
}
