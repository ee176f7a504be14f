use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use slingshot_sim::dynamics::Body;
use slingshot_sim::scene::{self, LaunchConfig, Scene, KM};
use slingshot_sim::sim::{run_with, SimConfig};

fn main() -> eframe::Result {
    let mut scene = scene::build(&LaunchConfig::default()).expect("scene construction failed");
    let config = SimConfig {
        base_time_step: 1.0,
        speed_multiplier: 30.0,
    };

    let mut series = TelemetrySeries::default();
    run_with(&mut scene, &config, |tick, observed| {
        let t = &observed.probe().telemetry;
        series.distance_km.push([observed.time, t.distance / KM]);
        series.speed.push([observed.time, t.speed]);
        series.force.push([observed.time, t.force]);
        tick < 2_000
    });

    let app = FlybyViz { scene, series };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Slingshot Simulator", options, Box::new(|_| Ok(Box::new(app))))
}

#[derive(Default)]
struct TelemetrySeries {
    distance_km: Vec<[f64; 2]>,
    speed: Vec<[f64; 2]>,
    force: Vec<[f64; 2]>,
}

struct FlybyViz {
    scene: Scene,
    series: TelemetrySeries,
}

/// Trail points in km, y negated: the physics frame is y-down, the plot
/// frame is y-up.
fn path_points(body: &Body) -> PlotPoints<'static> {
    body.trail
        .iter()
        .map(|p| [p.x / KM, -p.y / KM])
        .collect()
}

fn body_color(body: &Body) -> egui::Color32 {
    egui::Color32::from_rgb(body.color.r, body.color.g, body.color.b)
}

fn sampled(points: &[[f64; 2]]) -> PlotPoints<'static> {
    let step = (points.len() / 2000).max(1);
    points.iter().step_by(step).copied().collect()
}

impl eframe::App for FlybyViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading(format!("Encounter: {}", self.scene.name));
            let t = &self.scene.probe().telemetry;
            ui.label(format!(
                "Closest approach: {:.0} km  |  Max speed: {:.1} m/s  |  Max force: {:.3e} N  |  {} ticks",
                t.distance_min / KM,
                t.speed_max,
                t.force_max,
                self.scene.probe().trail.len(),
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;
            let half_h = available.y / 2.0 - 8.0;

            ui.horizontal(|ui| {
                // Trajectory paths
                ui.vertical(|ui| {
                    ui.label("Trajectory (km)");
                    Plot::new("trajectory")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("x (km)")
                        .data_aspect(1.0)
                        .show(ui, |plot_ui| {
                            for body in &self.scene.bodies {
                                plot_ui.line(
                                    Line::new("Path", path_points(body))
                                        .color(body_color(body)),
                                );
                            }
                        });
                });

                // Separation vs time
                ui.vertical(|ui| {
                    ui.label("Separation (km)");
                    Plot::new("distance")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new(
                                "Distance",
                                sampled(&self.series.distance_km),
                            ));
                        });
                });
            });

            ui.horizontal(|ui| {
                // Probe speed vs time
                ui.vertical(|ui| {
                    ui.label("Probe speed (m/s)");
                    Plot::new("speed")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Speed", sampled(&self.series.speed)));
                        });
                });

                // Net force vs time
                ui.vertical(|ui| {
                    ui.label("Net force (N)");
                    Plot::new("force")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Force", sampled(&self.series.force)));
                        });
                });
            });
        });
    }
}
