/*!
 * GUI dashboard for kep-dash - mini-kep time series viewer
 *
 * A desktop front end over `kep_dash::Dashboard`:
 * - Radio buttons for the frequency (Annual, Quarterly, Monthly, Daily)
 * - Two drop-downs for the series names offered at that frequency
 * - Two overlaid lines (navy, red) titled "name1, name2"
 *
 * Every widget change is forwarded as an `Event` and runs to completion before
 * the next frame. The API base URL can be overridden with `KEP_BASE_URL`.
 */

use chrono::{Datelike, NaiveDate};
use eframe::egui;
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke};
use kep_dash::{
    Client, DEFAULT_BASE_URL, Dashboard, Event, Frequency, SelectionState, SeriesTable, storage,
};
use log::error;
use std::path::PathBuf;

const NAVY: Color32 = Color32::from_rgb(0, 0, 128);
const PLOT_SIZE: [f32; 2] = [600.0, 400.0];

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([680.0, 620.0])
            .with_min_inner_size([640.0, 560.0])
            .with_title("mini-kep dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "mini-kep dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(KepApp::new()))),
    )
}

/// Main application state
struct KepApp {
    base_url: String,
    dashboard: Option<Dashboard<Client>>,
    status_message: String,
    error_message: String,
}

impl KepApp {
    fn new() -> Self {
        let base_url =
            std::env::var("KEP_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let mut app = Self {
            base_url,
            dashboard: None,
            status_message: String::new(),
            error_message: String::new(),
        };
        app.connect();
        app
    }

    /// Initial load: name options and the table for the default selection.
    fn connect(&mut self) {
        let opened = Client::new(self.base_url.as_str())
            .and_then(|client| Dashboard::open(client, SelectionState::default()));
        match opened {
            Ok(dashboard) => {
                self.dashboard = Some(dashboard);
                self.error_message.clear();
            }
            Err(err) => {
                error!("initial load failed: {}", err);
                self.error_message = format!("Failed to load dashboard: {}", err);
            }
        }
    }

    fn dispatch(&mut self, event: Event) {
        let Some(dashboard) = self.dashboard.as_mut() else {
            return;
        };
        match dashboard.handle(event) {
            Ok(()) => {
                self.error_message.clear();
                self.status_message = format!("{} rows", dashboard.table().len());
            }
            Err(err) => {
                error!("update failed: {}", err);
                self.error_message = format!("Update failed: {}", err);
            }
        }
    }

    fn export(&mut self) {
        let Some(dashboard) = self.dashboard.as_ref() else {
            return;
        };
        let start_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        let Some(path) = rfd::FileDialog::new()
            .set_directory(start_dir)
            .set_file_name("kep_table.csv")
            .add_filter("CSV", &["csv"])
            .add_filter("JSON", &["json"])
            .save_file()
        else {
            return;
        };

        let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");
        let saved = if is_json {
            storage::save_json(dashboard.table(), &path)
        } else {
            storage::save_csv(dashboard.table(), &path)
        };
        match saved {
            Ok(()) => self.status_message = format!("Saved {}", path.display()),
            Err(err) => {
                error!("export failed: {}", err);
                self.error_message = format!("Failed to save: {}", err);
            }
        }
    }
}

impl eframe::App for KepApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut pending: Option<Event> = None;
        let mut export_clicked = false;
        let mut retry_clicked = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.dashboard.as_ref() {
                Some(dashboard) => {
                    let state = dashboard.state().clone();
                    let options = dashboard.options();

                    ui.horizontal(|ui| {
                        for freq in Frequency::ALL {
                            if ui.radio(state.freq == freq, freq.label()).clicked()
                                && state.freq != freq
                            {
                                pending = Some(Event::FrequencyChanged(freq.index()));
                            }
                        }
                    });

                    ui.add_space(5.0);
                    if let Some(name) = name_selector(ui, "name1", &state.name1, options) {
                        pending = Some(Event::Name1Changed(name));
                    }
                    if let Some(name) = name_selector(ui, "name2", &state.name2, options) {
                        pending = Some(Event::Name2Changed(name));
                    }

                    ui.add_space(10.0);
                    draw_plot(ui, dashboard.table());

                    ui.add_space(10.0);
                    if ui.button("Export table").clicked() {
                        export_clicked = true;
                    }
                }
                None => {
                    ui.label(format!("Could not reach {}", self.base_url));
                    if ui.button("Retry").clicked() {
                        retry_clicked = true;
                    }
                }
            }

            if !self.status_message.is_empty() {
                ui.colored_label(Color32::DARK_GREEN, &self.status_message);
            }
            if !self.error_message.is_empty() {
                ui.colored_label(Color32::RED, &self.error_message);
            }
        });

        if let Some(event) = pending {
            self.dispatch(event);
        }
        if export_clicked {
            self.export();
        }
        if retry_clicked {
            self.connect();
        }
    }
}

/// Drop-down over `options`; returns the newly picked name, if any.
fn name_selector(ui: &mut egui::Ui, id: &str, current: &str, options: &[String]) -> Option<String> {
    let mut picked = current.to_string();
    egui::ComboBox::from_id_salt(id)
        .selected_text(current)
        .width(240.0)
        .show_ui(ui, |ui| {
            for name in options {
                ui.selectable_value(&mut picked, name.clone(), name.as_str());
            }
        });
    (picked != current).then_some(picked)
}

/// Two overlaid lines on a white canvas, title on top, date/value extremes on the axes.
fn draw_plot(ui: &mut egui::Ui, table: &SeriesTable) {
    let (response, painter) = ui.allocate_painter(PLOT_SIZE.into(), Sense::hover());
    let outer = response.rect;
    painter.rect_filled(outer, 0.0, Color32::WHITE);

    let title_font = FontId::proportional(16.0);
    let axis_font = FontId::proportional(11.0);
    painter.text(
        outer.center_top() + egui::vec2(0.0, 6.0),
        Align2::CENTER_TOP,
        table.title(),
        title_font,
        Color32::BLACK,
    );

    let (Some((first, last)), Some((mut lo, mut hi))) = (table.date_range(), table.value_range())
    else {
        painter.text(
            outer.center(),
            Align2::CENTER_CENTER,
            "No data",
            axis_font,
            Color32::GRAY,
        );
        return;
    };
    if (hi - lo).abs() < f64::EPSILON {
        lo -= 1.0;
        hi += 1.0;
    }

    let area = Rect::from_min_max(
        outer.min + egui::vec2(56.0, 32.0),
        outer.max - egui::vec2(16.0, 24.0),
    );
    let axis = Stroke::new(1.0, Color32::DARK_GRAY);
    painter.line_segment([area.left_bottom(), area.right_bottom()], axis);
    painter.line_segment([area.left_top(), area.left_bottom()], axis);

    let x0 = day_number(first);
    let span = (day_number(last) - x0).max(1.0);
    let to_screen = |date: NaiveDate, value: f64| -> Pos2 {
        let fx = (day_number(date) - x0) / span;
        let fy = (value - lo) / (hi - lo);
        Pos2::new(
            area.left() + fx as f32 * area.width(),
            area.bottom() - fy as f32 * area.height(),
        )
    };

    for (points, color) in [(table.line1(), NAVY), (table.line2(), Color32::RED)] {
        let screen: Vec<Pos2> = points.into_iter().map(|(d, v)| to_screen(d, v)).collect();
        painter.add(Shape::line(screen, Stroke::new(2.0, color)));
    }

    let labels = [
        (area.left_bottom(), Align2::LEFT_TOP, first.to_string()),
        (area.right_bottom(), Align2::RIGHT_TOP, last.to_string()),
        (area.left_top(), Align2::RIGHT_CENTER, format!("{:.1} ", hi)),
        (area.left_bottom(), Align2::RIGHT_CENTER, format!("{:.1} ", lo)),
    ];
    for (pos, anchor, text) in labels {
        painter.text(pos, anchor, text, axis_font.clone(), Color32::DARK_GRAY);
    }
}

/// Day number as a float, for linear placement on the x axis.
fn day_number(d: NaiveDate) -> f64 {
    f64::from(d.num_days_from_ce())
}
