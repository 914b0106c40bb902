use nannou::prelude::*;
use nannou::winit::event::TouchPhase;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use super::global;
use crate::clock::{Clock, FramePacer};
use crate::config::Settings;
use crate::core::logging::{debug, error, info, trace, warn};
use crate::session::{Navigator, Screen, SessionFrame};
use crate::ui::{Dashboard, OverlayLayout, visualization};

const FPS_LOG_INTERVAL: Duration = Duration::from_secs(5);

pub fn run(settings: Settings) {
    global::set_settings(settings);
    nannou::app(model)
        .update(update)
        .view(view)
        .event(event)
        .run();
}

/// Requests that are applied during `update`. `view` only has shared access
/// to the model, so it reports through the same channel.
#[derive(Debug)]
pub enum AppEvent {
    Select(String),
    Back,
    SurfaceFailed(String),
}

#[derive(Clone)]
struct AppEventSender {
    tx: mpsc::Sender<AppEvent>,
}

impl AppEventSender {
    fn new(tx: mpsc::Sender<AppEvent>) -> Self {
        Self { tx }
    }

    fn emit(&self, event: AppEvent) {
        if let Err(e) = self.tx.send(event) {
            error!("Unable to emit app event: {}", e);
        }
    }
}

struct AppModel {
    app_rx: mpsc::Receiver<AppEvent>,
    app_tx: AppEventSender,
    dashboard: Dashboard,
    frame: Option<SessionFrame>,
    last_fps_log: Instant,
    main_window_id: window::Id,
    navigator: Navigator,
    pacer: FramePacer,
}

impl AppModel {
    fn window_rect(&self, app: &App) -> Rect {
        app.window(self.main_window_id)
            .map_or_else(|| app.window_rect(), |window| window.rect())
    }

    fn on_app_event(&mut self, app: &App, event: AppEvent) {
        match event {
            AppEvent::Select(id) => {
                match self.navigator.select(&id, Clock::wall()) {
                    Ok(()) => {
                        let wr = self.window_rect(app);
                        info!(
                            "Visualizing `{}` at {}x{}",
                            id,
                            wr.w(),
                            wr.h()
                        );
                        self.frame = None;
                        self.pacer.reset(Instant::now());
                    }
                    Err(e) => warn!("Selection ignored: {}", e),
                }
            }
            AppEvent::Back => {
                if self.navigator.back() {
                    self.frame = None;
                    self.dashboard.fit(self.window_rect(app));
                }
            }
            AppEvent::SurfaceFailed(message) => {
                if self.navigator.abort(&message) {
                    self.frame = None;
                }
            }
        }
    }

    fn on_press(&mut self, app: &App, point: Vec2) {
        let wr = self.window_rect(app);
        match self.navigator.screen() {
            Screen::Dashboard => {
                if let Some(pattern) = self.dashboard.pattern_at(wr, point) {
                    self.app_tx.emit(AppEvent::Select(pattern.id.to_string()));
                }
            }
            Screen::Visualization(_) => {
                if OverlayLayout::new(wr).hits_back(point) {
                    self.app_tx.emit(AppEvent::Back);
                }
            }
        }
    }

    fn on_scroll(&mut self, app: &App, delta: MouseScrollDelta) {
        if !self.navigator.is_dashboard() {
            return;
        }
        let wr = self.window_rect(app);
        match delta {
            MouseScrollDelta::LineDelta(_, y) => {
                self.dashboard.scroll_lines(-y, wr)
            }
            MouseScrollDelta::PixelDelta(position) => {
                self.dashboard.scroll_pixels(-position.y as f32, wr)
            }
        }
    }

    fn on_resize(&mut self, app: &App) {
        let wr = self.window_rect(app);
        debug!("Resized to {}x{}", wr.w(), wr.h());
        self.dashboard.fit(wr);
        if let Some(session) = self.navigator.session_mut() {
            session.clear_trail();
        }
    }
}

fn model(app: &App) -> AppModel {
    let settings = global::settings();
    info!("Launch settings: {:?}", settings);

    app.set_exit_on_escape(false);

    let main_window_id = app
        .new_window()
        .title("Breath Lab")
        .size(settings.width, settings.height)
        .build()
        .unwrap_or_else(|e| {
            error!("Unable to open window: {:?}", e);
            std::process::exit(1);
        });

    if settings.fullscreen {
        if let Some(window) = app.window(main_window_id) {
            window.set_fullscreen(true);
        }
    }

    let (raw_event_tx, app_rx) = mpsc::channel();
    let app_tx = AppEventSender::new(raw_event_tx);

    if let Some(id) = &settings.pattern {
        app_tx.emit(AppEvent::Select(id.clone()));
    }

    AppModel {
        app_rx,
        app_tx,
        dashboard: Dashboard::new(),
        frame: None,
        last_fps_log: Instant::now(),
        main_window_id,
        navigator: Navigator::new(settings.trail),
        pacer: FramePacer::new(settings.fps),
    }
}

fn update(app: &App, model: &mut AppModel, _update: Update) {
    while let Ok(event) = model.app_rx.try_recv() {
        model.on_app_event(app, event);
    }

    let now = Instant::now();
    let tick = model.pacer.tick(now);
    if !tick.should_render {
        return;
    }
    if tick.frames_advanced > 1 {
        trace!("Skipped {} frames", tick.frames_advanced - 1);
    }

    if now.duration_since(model.last_fps_log) >= FPS_LOG_INTERVAL {
        model.last_fps_log = now;
        debug!(
            "Average fps: {:.1} ({} frames)",
            model.pacer.average_fps(),
            model.pacer.frame_count()
        );
    }

    let wr = model.window_rect(app);
    if let Some(session) = model.navigator.session_mut() {
        model.frame = session.advance(wr);
        if model.frame.is_none() {
            model.navigator.back();
        }
    }
}

fn event(app: &App, model: &mut AppModel, event: Event) {
    match event {
        Event::WindowEvent {
            simple: Some(MousePressed(MouseButton::Left)),
            ..
        } => {
            model.on_press(app, app.mouse.position());
        }
        Event::WindowEvent {
            simple: Some(Touch(touch)),
            ..
        } if touch.phase == TouchPhase::Started => {
            model.on_press(app, touch.position);
        }
        Event::WindowEvent {
            simple: Some(MouseWheel(delta, _)),
            ..
        } => {
            model.on_scroll(app, delta);
        }
        Event::WindowEvent {
            id,
            simple: Some(Resized(_)),
            ..
        } => {
            if id == model.main_window_id {
                model.on_resize(app);
            }
        }
        _ => {}
    }
}

fn view(app: &App, model: &AppModel, frame: Frame) {
    let draw = app.draw();
    let wr = model.window_rect(app);

    match model.navigator.screen() {
        Screen::Dashboard => {
            draw.background().color(BLACK);
            model.dashboard.draw(&draw, wr, app.mouse.position());
        }
        Screen::Visualization(session) => {
            visualization::clear(&draw);
            if let Some(SessionFrame { state, primitives }) = &model.frame {
                visualization::draw(
                    &draw,
                    wr,
                    session.pattern(),
                    primitives,
                    state,
                    app.mouse.position(),
                );
            }
        }
    }

    if let Err(e) = draw.to_frame(app, &frame) {
        model.app_tx.emit(AppEvent::SurfaceFailed(format!("{:?}", e)));
    }
}
