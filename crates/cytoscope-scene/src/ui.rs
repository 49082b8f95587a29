//! egui overlays: loading screen, controls, name tags, help bar, and the
//! info panel

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};
use cytoscope_core::OrganelleDescriptor;

use crate::camera::MainCamera;
use crate::loading::TextureLibrary;
use crate::organelles::OrganelleUnit;
use crate::types::{CellCatalog, LayerVisibility, SceneSettings, SelectedOrganelle};

/// Space between the top of a shape and its name tag, in world units.
const LABEL_GAP: f32 = 0.15;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiPrimaryContextPass, (ui_system, organelle_labels));
    }
}

fn ui_system(
    mut contexts: EguiContexts,
    cell: Res<CellCatalog>,
    library: Res<TextureLibrary>,
    selected: Res<SelectedOrganelle>,
    layers: ResMut<LayerVisibility>,
    settings: ResMut<SceneSettings>,
    mut shown: Local<Option<OrganelleDescriptor>>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    if !library.ready() {
        loading_overlay(ctx, &library);
    }

    control_panel(ctx, layers, settings);
    help_bar(ctx);
    selection_panel(ctx, &cell, &selected, &mut shown);
}

/// Camera-facing name tag over every organelle, projected into screen
/// space each frame so it rides the floating animation.
fn organelle_labels(
    mut contexts: EguiContexts,
    layers: Res<LayerVisibility>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    organelles: Query<(&Transform, &OrganelleUnit)>,
) {
    if !layers.organelles {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    let screen = ctx.screen_rect();
    egui::Area::new(egui::Id::new("organelle_labels"))
        .order(egui::Order::Background)
        .movable(false)
        .interactable(false)
        .fixed_pos(egui::Pos2::ZERO)
        .show(ctx, |ui| {
            let painter = ui.painter_at(screen);
            for (transform, unit) in &organelles {
                let anchor = label_anchor(transform.translation, unit.hit_radius);
                let Ok(pos) = camera.world_to_viewport(camera_transform, anchor) else {
                    continue;
                };
                let distance = camera_transform.translation().distance(transform.translation);
                painter.text(
                    egui::pos2(pos.x, pos.y),
                    egui::Align2::CENTER_BOTTOM,
                    &unit.name,
                    egui::FontId::proportional(label_font_size(distance)),
                    egui::Color32::WHITE,
                );
            }
        });
}

/// World-space point a name tag hangs over, just above the shape.
fn label_anchor(translation: Vec3, hit_radius: f32) -> Vec3 {
    translation + Vec3::Y * (hit_radius + LABEL_GAP)
}

/// Name tags shrink as the camera pulls back.
fn label_font_size(distance: f32) -> f32 {
    (110.0 / distance).clamp(8.0, 20.0)
}

/// Centered progress card while textures load, or the failure report if
/// any of them broke.
fn loading_overlay(ctx: &egui::Context, library: &TextureLibrary) {
    egui::Window::new("loading_overlay")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            if library.failed.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.heading("Loading cell assets");
                    ui.label(format!(
                        "{} / {} textures",
                        library.resolved,
                        library.total()
                    ));
                    ui.add(egui::Spinner::new());
                });
            } else {
                ui.heading("Scene failed to load");
                for path in &library.failed {
                    ui.colored_label(
                        egui::Color32::LIGHT_RED,
                        format!("Could not load {path}"),
                    );
                }
            }
        });
}

fn control_panel(
    ctx: &egui::Context,
    mut layers: ResMut<LayerVisibility>,
    mut settings: ResMut<SceneSettings>,
) {
    egui::Window::new("controls")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(12.0, 12.0))
        .show(ctx, |ui| {
            let label = if layers.organelles {
                "Hide Organelles"
            } else {
                "Show Organelles"
            };
            if ui.button(label).clicked() {
                layers.toggle_organelles();
            }

            // Only write through the resource on an actual change.
            let mut boundary = layers.boundary;
            ui.checkbox(&mut boundary, "Show cell boundary");
            if boundary != layers.boundary {
                layers.boundary = boundary;
            }

            let mut floating = settings.floating;
            ui.checkbox(&mut floating, "Floating animation");
            if floating != settings.floating {
                settings.floating = floating;
            }
        });
}

fn help_bar(ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("help_bar").show(ctx, |ui| {
        ui.label(
            egui::RichText::new(
                "Drag to orbit | Scroll to zoom | Right-drag to pan | Esc to deselect",
            )
            .small()
            .color(egui::Color32::GRAY),
        );
    });
}

/// Remember the card text currently on screen so a deselect can keep it
/// while the card slides back out. Returns whether the card is open.
fn remembered(
    current: Option<&OrganelleDescriptor>,
    shown: &mut Option<OrganelleDescriptor>,
) -> bool {
    if let Some(descriptor) = current {
        *shown = Some(descriptor.clone());
    }
    current.is_some()
}

/// Info card for the selected organelle. Slides in from the right on
/// selection and back out on deselect; switching directly from one
/// organelle to another swaps the text without replaying the slide.
fn selection_panel(
    ctx: &egui::Context,
    cell: &CellCatalog,
    selected: &SelectedOrganelle,
    shown: &mut Option<OrganelleDescriptor>,
) {
    let slide_id = egui::Id::new("info_panel_slide");

    let current = selected.0.as_deref().and_then(|name| cell.descriptor(name));
    let open = remembered(current, shown);

    let t = ctx.animate_bool_with_time(slide_id, open, 0.4);
    if t <= 0.0 {
        *shown = None;
        return;
    }
    let Some(descriptor) = shown.as_ref() else {
        return;
    };
    let slide = (1.0 - t) * 300.0;

    egui::Window::new("organelle_info")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .default_width(260.0)
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0 + slide, 16.0))
        .show(ctx, |ui| {
            ui.set_opacity(t);
            ui.heading(&descriptor.name);
            ui.separator();
            ui.label(&descriptor.description);
        });
}
