use std::path::PathBuf;

use client_core::{ElementIds, TaskWidget};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::TaskRowId;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::apply_ui_event;
use crate::ui::hearts::HeartTextures;
use crate::ui::page::HostPage;

const HEART_SIZE: f32 = 32.0;
const COMPLETE_LABEL: &str = "Complete";

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub server_url: String,
    pub asset_root: PathBuf,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:5000".to_string(),
            asset_root: PathBuf::from("."),
        }
    }
}

pub struct HeartlistApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    widget: TaskWidget<HostPage>,
    hearts: HeartTextures,
    status: String,
}

impl HeartlistApp {
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> anyhow::Result<Self> {
        let ids = ElementIds::default();
        let widget = TaskWidget::mount(HostPage::new(ids.clone()), &ids)?;
        Ok(Self {
            cmd_tx,
            ui_rx,
            widget,
            hearts: HeartTextures::new(startup.asset_root),
            status: format!("Sending to {}", startup.server_url),
        })
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            apply_ui_event(&mut self.widget, &mut self.status, event);
        }
    }

    fn submit_form(&mut self) {
        let Some(pending) = self.widget.begin_submit() else {
            return;
        };
        if let Err((cmd, err)) =
            dispatch_backend_command(&self.cmd_tx, BackendCommand::SubmitMessage { pending })
        {
            let BackendCommand::SubmitMessage { pending } = cmd;
            self.widget.finish_submit(pending, Err(err));
        }
    }

    fn show_task_form(&mut self, ui: &mut egui::Ui) {
        let ids = self.widget.page().ids().clone();
        let mut submitted = false;
        ui.push_id(ids.form.as_str(), |ui| {
            ui.horizontal(|ui| {
                let edit = egui::TextEdit::singleline(&mut self.widget.page_mut().input)
                    .id_salt(ids.input.as_str())
                    .hint_text("New task")
                    .desired_width(ui.available_width() - 80.0);
                let response = ui.add(edit);
                let enter =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Send").clicked() || enter {
                    submitted = true;
                }
            });
        });
        if submitted {
            self.submit_form();
        }
    }

    fn show_messages(&mut self, ui: &mut egui::Ui) {
        let mut completed: Option<TaskRowId> = None;
        let messages_id = self.widget.page().ids().messages.clone();
        ui.push_id(messages_id, |ui| {
            for row in self.widget.page().rows() {
                ui.horizontal(|ui| {
                    ui.label(&row.text);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button(COMPLETE_LABEL).clicked() {
                            completed = Some(row.row_id);
                        }
                    });
                });
                ui.add_space(8.0);
            }
        });
        if let Some(row_id) = completed {
            self.widget.complete_task(row_id);
        }
    }

    fn show_hearts(&mut self, ui: &mut egui::Ui) {
        let hearts_id = self.widget.page().ids().hearts.clone();
        let hearts = self.widget.page().hearts().to_vec();
        ui.push_id(hearts_id, |ui| {
            ui.horizontal(|ui| {
                for heart in &hearts {
                    match self.hearts.get(ui.ctx(), heart.src) {
                        Some(texture) => {
                            ui.add(
                                egui::Image::new(&texture)
                                    .fit_to_exact_size(egui::vec2(HEART_SIZE, HEART_SIZE)),
                            )
                            .on_hover_text(heart.alt);
                        }
                        None => {
                            ui.label(
                                egui::RichText::new("\u{2665}")
                                    .size(HEART_SIZE * 0.8)
                                    .color(egui::Color32::from_rgb(220, 40, 70)),
                            )
                            .on_hover_text(heart.alt);
                        }
                    }
                    ui.add_space(5.0);
                }
            });
        });
    }

    fn show_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.widget.page().active_alert().map(str::to_string) else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.widget.page_mut().dismiss_alert();
        }
    }
}

impl eframe::App for HeartlistApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let blocked = self.widget.page().active_alert().is_some();
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.weak(&self.status);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                self.show_task_form(ui);
                ui.separator();
                self.show_messages(ui);
                ui.separator();
                self.show_hearts(ui);
            });
        });
        self.show_alert(ctx);

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

#[cfg(test)]
#[path = "../tests/app_tests.rs"]
mod tests;
