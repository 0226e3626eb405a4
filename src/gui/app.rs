use crate::Utils::plots::{ChartSpec, PlotError, plot_function_rgb};
use crate::evaluator::{PlotPresenter, PlotSettings, evaluate_and_plot};
use crate::gui::backdrop::Backdrop;
use crate::gui::chart_window::ChartWindow;
use crate::gui::fonts::install_font;
use crate::localization::language_state::{LanguageState, PromptAlign};
use eframe::egui::{self, Align, Color32, Layout, RichText};
use log::{debug, info};

const BUTTON_FILL: Color32 = Color32::from_rgb(0, 178, 255);
const WINDOW_BACKGROUND: Color32 = Color32::from_gray(26);
const BUTTON_SIZE: [f32; 2] = [220.0, 32.0];

/// Renders charts into a bitmap and hands them to a new [`ChartWindow`].
struct WindowPresenter<'a> {
    size: (u32, u32),
    window: &'a mut Option<ChartWindow>,
}

impl PlotPresenter for WindowPresenter<'_> {
    fn present(&mut self, chart: ChartSpec) -> Result<(), PlotError> {
        let rgb = plot_function_rgb(&chart, self.size)?;
        *self.window = Some(ChartWindow::new(chart.title, self.size, &rgb));
        Ok(())
    }
}

pub struct FxFinderApp {
    state: LanguageState,
    input: String,
    backdrop: Backdrop,
    chart: Option<ChartWindow>,
    settings: PlotSettings,
    chart_size: (u32, u32),
}

impl FxFinderApp {
    pub fn new(cc: &eframe::CreationContext<'_>, font_bytes: Vec<u8>, chart_size: (u32, u32)) -> Self {
        install_font(&cc.egui_ctx, font_bytes);
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        FxFinderApp {
            state: LanguageState::default(),
            input: String::new(),
            backdrop: Backdrop::default(),
            chart: None,
            settings: PlotSettings::default(),
            chart_size,
        }
    }

    fn plot(&mut self) {
        let mut presenter = WindowPresenter {
            size: self.chart_size,
            window: &mut self.chart,
        };
        evaluate_and_plot(&self.input, &mut self.state, &self.settings, &mut presenter);
    }

    fn widgets(&mut self, ui: &mut egui::Ui) {
        let labels = self.state.labels().clone();
        ui.add_space(30.0);
        let prompt_layout = match labels.prompt_align {
            PromptAlign::Center => Layout::top_down(Align::Center),
            PromptAlign::Right => Layout::top_down(Align::Max),
        };
        ui.allocate_ui_with_layout(egui::vec2(ui.available_width(), 0.0), prompt_layout, |ui| {
            ui.label(RichText::new(&labels.prompt).size(16.0).color(Color32::WHITE));
        });
        ui.add_space(12.0);

        ui.vertical_centered(|ui| {
            let input = ui.add(
                egui::TextEdit::singleline(&mut self.input)
                    .desired_width(BUTTON_SIZE[0] * 1.5)
                    .font(egui::TextStyle::Heading),
            );
            let submitted = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.add_space(12.0);

            let plot_button = egui::Button::new(RichText::new(&labels.plot_button).color(Color32::WHITE))
                .fill(BUTTON_FILL)
                .min_size(BUTTON_SIZE.into());
            if ui.add(plot_button).clicked() || submitted {
                debug!("plot requested for '{}'", self.input);
                self.plot();
            }
            ui.add_space(8.0);

            let language_button =
                egui::Button::new(RichText::new(&labels.language_button).color(Color32::WHITE))
                    .fill(BUTTON_FILL)
                    .min_size(BUTTON_SIZE.into());
            if ui.add(language_button).clicked() {
                self.state.toggle();
            }
            ui.add_space(12.0);

            ui.label(RichText::new(&self.state.labels().result).color(Color32::RED));
        });
    }
}

impl eframe::App for FxFinderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(chart) = self.chart.as_mut() {
            if !chart.show(ctx) {
                info!("chart '{}' dismissed", chart.title());
                self.chart = None;
            }
        }
        let chart_open = self.chart.is_some();

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(WINDOW_BACKGROUND))
            .show(ctx, |ui| {
                if self.backdrop.track(ui.max_rect()) {
                    debug!("backdrop placed at {:?}", self.backdrop.rect());
                }
                self.backdrop.paint(ui.painter());
                ui.add_enabled_ui(!chart_open, |ui| self.widgets(ui));
            });
    }
}
