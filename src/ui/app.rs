use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui::{self, Color32, Context};

use crate::config::DemoConfig;
use crate::domain::user::{User, generate_users};
use crate::services::{LoadSimulator, Mode, QueryDispatcher, UserFilter};
use crate::ui::views::load_view::LoadView;
use crate::ui::views::user_list_view::UserListView;
use crate::ui::widgets::search_box::SearchBox;

/// Main application shell. One frame loop drives everything: debounce
/// deadlines, deferred low-priority query commits, load generator ticks, and
/// the widget pass itself. There is deliberately no second thread; the whole
/// point is watching one thread fight over its own time.
pub struct DemoApp {
    config: DemoConfig,
    corpus: Arc<Vec<User>>,

    dispatcher: QueryDispatcher,
    filter: UserFilter,
    load: LoadSimulator,

    // View components
    search_box: SearchBox,
    user_list_view: UserListView,
    load_view: LoadView,
}

impl DemoApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: DemoConfig) -> Self {
        setup_text_styles(&cc.egui_ctx);

        let corpus = Arc::new(generate_users(config.corpus_size));
        tracing::info!("Generated corpus of {} users", corpus.len());

        Self {
            dispatcher: QueryDispatcher::new(&config),
            filter: UserFilter::new(&config),
            load: LoadSimulator::new(&config),
            search_box: SearchBox::new(),
            user_list_view: UserListView::new(),
            load_view: LoadView::new(),
            corpus,
            config,
        }
    }

    fn show_top_panel(&mut self, ctx: &Context, updating: bool) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Filter Lab");
                ui.separator();

                let mode = self.dispatcher.mode();
                ui.colored_label(mode_accent(mode), "●");
                let button = egui::Button::new(
                    egui::RichText::new(mode.label()).color(Color32::WHITE),
                )
                .fill(mode_accent(mode));
                if ui.add(button).clicked() {
                    self.dispatcher.set_mode(mode.cycle());
                }

                ui.separator();

                let running = self.load.is_running();
                if ui
                    .add_enabled(!running, egui::Button::new("Start CPU load"))
                    .clicked()
                {
                    self.load.start();
                }
                if ui
                    .add_enabled(running, egui::Button::new("Stop CPU load"))
                    .clicked()
                {
                    self.load.stop();
                }

                if updating || self.dispatcher.is_pending() {
                    ui.separator();
                    ui.spinner();
                    ui.label("updating results…");
                }
            });
        });
    }

    fn show_central_panel(&mut self, ctx: &Context, now: Instant) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.search_box.show(ui, &mut self.dispatcher, now);
            ui.separator();

            // The load panel sticks around after a stop so the kept state is
            // visible; a restart resumes from the same cursor.
            if self.load.is_running() || !self.load.recent_primes().is_empty() {
                self.load_view.show(ui, &self.load);
                ui.separator();
            }

            let results = self
                .filter
                .filter(&self.corpus, self.dispatcher.authoritative());
            self.user_list_view.show(ui, results);
        });
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // Low-priority work first thing in the frame: anything taken here was
        // issued on an earlier frame, so its keystroke echo has already
        // painted. Commit checks the generation and drops superseded values.
        // The flag keeps the pending indicator up through the frame that pays
        // the recompute below.
        let mut updating = false;
        if let Some(update) = self.dispatcher.take_pending() {
            updating = self.dispatcher.commit(update);
        }

        self.dispatcher.poll(now);

        let foreground = ctx.input(|i| i.raw.focused);
        self.load.tick(now, foreground);

        self.show_top_panel(ctx, updating);
        self.show_central_panel(ctx, now);

        // Keep frames coming while anything is outstanding.
        if self.dispatcher.is_pending() {
            ctx.request_repaint();
        }
        if self.dispatcher.is_debouncing() {
            ctx.request_repaint_after(Duration::from_millis(16));
        }
        if self.load.is_running() {
            ctx.request_repaint_after(self.config.tick_interval);
        }
    }
}

fn mode_accent(mode: Mode) -> Color32 {
    match mode {
        Mode::Immediate => Color32::from_rgb(59, 130, 246),
        Mode::Debounced => Color32::from_rgb(168, 85, 247),
        Mode::Deprioritized => Color32::from_rgb(34, 197, 94),
    }
}

// TODO: bundle a CJK-capable font; the default egui fonts render the Korean
// sample data as placeholder glyphs.
fn setup_text_styles(ctx: &Context) {
    let mut style = (*ctx.style()).clone();

    style.text_styles = [
        (
            egui::TextStyle::Small,
            egui::FontId::new(12.0, egui::FontFamily::Proportional),
        ),
        (
            egui::TextStyle::Body,
            egui::FontId::new(14.0, egui::FontFamily::Proportional),
        ),
        (
            egui::TextStyle::Button,
            egui::FontId::new(14.0, egui::FontFamily::Proportional),
        ),
        (
            egui::TextStyle::Heading,
            egui::FontId::new(20.0, egui::FontFamily::Proportional),
        ),
        (
            egui::TextStyle::Monospace,
            egui::FontId::new(13.0, egui::FontFamily::Monospace),
        ),
    ]
    .into();

    ctx.set_style(style);
}
