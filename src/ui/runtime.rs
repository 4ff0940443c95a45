use ratatui::backend::Backend;
use ratatui::Terminal;
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::sync::watch;

use crate::api::ProductsApi;
use crate::manager::{Confirm, ProductManager, DELETE_PROMPT};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::products::ProductsState;
use crate::ui::prompt::TerminalPrompt;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the product view until the user quits.
///
/// Everything happens on the calling task: each remote call is awaited to
/// completion before the next key is handled.
pub async fn run<A: ProductsApi>(api: A, base_url: &str, tick_rate: Duration) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut events = EventHandler::new(tick_rate);
    let mut app = App::new(base_url);
    let mut manager = ProductManager::new(api);
    let mut states = manager.subscribe();

    tracing::info!(base_url, "Product view started");
    drive(
        &mut events,
        &mut app,
        &mut states,
        manager.refresh(),
        |state, app| redraw(&mut terminal, state, app),
    )
    .await?;

    loop {
        app.clamp_selection(manager.state().products.len());
        terminal.draw(|frame| draw(frame, manager.state(), &app))?;
        if app.should_quit() {
            break;
        }

        let action = match events.next().await {
            Some(AppEvent::Key(key)) => handle_key(&mut app, &mut manager, key),
            Some(AppEvent::Tick) => {
                app.on_tick();
                continue;
            }
            Some(AppEvent::Resize) => {
                terminal.autoresize()?;
                continue;
            }
            None => break,
        };

        match action {
            InputAction::None => {}
            InputAction::Refresh => {
                drive(
                    &mut events,
                    &mut app,
                    &mut states,
                    manager.refresh(),
                    |state, app| redraw(&mut terminal, state, app),
                )
                .await?
            }
            InputAction::SubmitAdd => {
                drive(
                    &mut events,
                    &mut app,
                    &mut states,
                    manager.submit_add(),
                    |state, app| redraw(&mut terminal, state, app),
                )
                .await?
            }
            InputAction::SubmitEdit => {
                drive(
                    &mut events,
                    &mut app,
                    &mut states,
                    manager.submit_edit(),
                    |state, app| redraw(&mut terminal, state, app),
                )
                .await?
            }
            InputAction::Delete(id) => {
                let confirmed = TerminalPrompt::new(
                    &mut terminal,
                    &mut events,
                    manager.state().clone(),
                    app.clone(),
                )
                .confirm(DELETE_PROMPT)
                .await;
                if !confirmed {
                    tracing::debug!(%id, "Delete declined");
                    continue;
                }
                drive(
                    &mut events,
                    &mut app,
                    &mut states,
                    manager.remove_confirmed(&id),
                    |state, app| redraw(&mut terminal, state, app),
                )
                .await?
            }
        }
    }

    tracing::info!("Product view closed");
    drop(guard);
    Ok(())
}

/// Await `action` while passing every published state to `render` and
/// animating the spinner. Key presses that arrive meanwhile are dropped.
async fn drive<F, R>(
    events: &mut EventHandler,
    app: &mut App,
    states: &mut watch::Receiver<ProductsState>,
    action: F,
    mut render: R,
) -> io::Result<()>
where
    F: Future<Output = ()>,
    R: FnMut(&ProductsState, &App) -> io::Result<()>,
{
    tokio::pin!(action);
    loop {
        tokio::select! {
            () = &mut action => return Ok(()),
            changed = states.changed() => {
                if changed.is_err() {
                    // Publisher gone; nothing more to draw until the action ends.
                    (&mut action).await;
                    return Ok(());
                }
                let state = states.borrow_and_update().clone();
                render(&state, app)?;
            }
            event = events.next() => match event {
                Some(AppEvent::Tick) => {
                    app.on_tick();
                    let state = states.borrow().clone();
                    render(&state, app)?;
                }
                Some(AppEvent::Key(key)) => {
                    tracing::trace!(?key, "Key dropped while a request is in flight");
                }
                Some(AppEvent::Resize) => {}
                None => {
                    (&mut action).await;
                    return Ok(());
                }
            },
        }
    }
}

fn redraw<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &ProductsState,
    app: &App,
) -> io::Result<()> {
    terminal
        .draw(|frame| draw(frame, state, app))
        .map(|_| ())
        .map_err(|e| io::Error::other(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::model::{Product, ProductId, ProductPayload};
    use crate::ui::table::LOADING_MESSAGE;
    use async_trait::async_trait;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use rust_decimal::Decimal;

    /// Backend whose list call takes long enough for the UI to draw a frame.
    struct SlowListApi;

    #[async_trait]
    impl ProductsApi for SlowListApi {
        async fn list(&self) -> Result<Vec<Product>, ApiError> {
            tokio::time::sleep(Duration::from_millis(20)).await;
            Ok(vec![Product {
                id: ProductId::Number(1),
                name: "Widget".to_string(),
                price: Decimal::new(999, 2),
                quantity: 3,
            }])
        }

        async fn create(&self, _payload: &ProductPayload) -> Result<Product, ApiError> {
            Err(rejected("POST"))
        }

        async fn update(&self, _id: &ProductId, _payload: &ProductPayload) -> Result<(), ApiError> {
            Err(rejected("PUT"))
        }

        async fn delete(&self, _id: &ProductId) -> Result<(), ApiError> {
            Ok(())
        }
    }

    fn rejected(method: &'static str) -> ApiError {
        ApiError::Server {
            method,
            url: "test".to_string(),
            status: 405,
            body: String::new(),
        }
    }

    fn frame_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[tokio::test]
    async fn delete_refresh_draws_spinner_and_drops_keys() {
        let mut manager = ProductManager::new(SlowListApi);
        let mut states = manager.subscribe();
        let (tx, mut events) = EventHandler::channel();
        let mut app = App::new("http://localhost:5286");
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut frames = Vec::new();

        tx.send(AppEvent::Key(KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
        )))
        .ok();

        drive(
            &mut events,
            &mut app,
            &mut states,
            manager.remove_confirmed(&ProductId::Number(1)),
            |state, app| {
                redraw(&mut terminal, state, app)?;
                frames.push(frame_text(&terminal));
                Ok(())
            },
        )
        .await
        .unwrap();

        assert!(frames.iter().any(|frame| frame.contains(LOADING_MESSAGE)));
        assert!(!manager.state().loading);
        assert_eq!(manager.state().products.len(), 1);

        // The key sent during the request was consumed, not queued.
        drop(tx);
        assert!(events.next().await.is_none());
        assert!(!app.should_quit());
    }
}
