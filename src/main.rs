use slingshot_sim::io::{csv, json};
use slingshot_sim::render::Viewport;
use slingshot_sim::scene::{self, LaunchConfig, KM};
use slingshot_sim::sim::event::{
    ClosestApproachDetector, EventDetector, EventKind, SeparationDetector, SimEvent,
};
use slingshot_sim::sim::{run_with, SimConfig};

const TICKS: u64 = 2_000;
const SAMPLE_INTERVAL: u64 = 100;

fn main() {
    // -----------------------------------------------------------------------
    // Run configuration: Earth flyby
    // -----------------------------------------------------------------------
    let launch = LaunchConfig::default();
    let config = SimConfig {
        base_time_step: 1.0,
        speed_multiplier: 30.0,
    };
    // 200,000 km of space mapped onto a 1280x720 surface.
    let viewport =
        Viewport::new(200_000.0, 1280.0, 720.0).expect("viewport construction failed");

    let mut scene = scene::build(&launch).expect("scene construction failed");

    // -----------------------------------------------------------------------
    // Print parameters
    // -----------------------------------------------------------------------
    let planet = scene.planet();
    let probe = scene.probe();

    println!();
    println!("====================================================================");
    println!("  GRAVITY-ASSIST SIMULATION — {}", scene.name);
    println!("====================================================================");
    println!();
    println!("  Scene Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Planet mass:   {:>11.3e} kg   Planet radius: {:>9.0} km",
        planet.mass,
        planet.radius / KM
    );
    println!(
        "  Probe mass:    {:>11.3e} kg   Probe offset:  {:>9.0} km",
        probe.mass,
        launch.orbital_offset.norm()
    );
    println!(
        "  Launch speed:  {:>8.0} m/s      Heading:       {:>9.1}°",
        launch.launch_speed, launch.launch_heading
    );
    println!(
        "  Time step:     {:>8.1} s        Scale:         {:>9.1} km/unit",
        config.dt(),
        viewport.scale_factor()
    );
    println!();

    // -----------------------------------------------------------------------
    // Run simulation
    // -----------------------------------------------------------------------
    println!("  Telemetry Feed");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>8}  {:>12}  {:>10}  {:>11}  {:>6}",
        "t (s)", "dist (km)", "v (m/s)", "F (N)", "tick"
    );
    println!("  {}", "─".repeat(58));

    let mut detectors: Vec<Box<dyn EventDetector>> = vec![
        Box::new(ClosestApproachDetector::default()),
        Box::new(SeparationDetector::new(2.0e7, true)),
    ];
    let mut events: Vec<SimEvent> = Vec::new();

    run_with(&mut scene, &config, |tick, observed| {
        for det in &mut detectors {
            if let Some(event) = det.check(observed) {
                events.push(event);
            }
        }

        if tick % SAMPLE_INTERVAL == 0 || tick == TICKS {
            let t = &observed.probe().telemetry;
            println!(
                "  {:>8.0}  {:>12.0}  {:>10.1}  {:>11.3e}  {:>6}",
                observed.time,
                t.distance / KM,
                t.speed,
                t.force,
                tick
            );
        }
        tick < TICKS
    });

    // -----------------------------------------------------------------------
    // Encounter events
    // -----------------------------------------------------------------------
    println!();
    println!("  Encounter Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    if events.is_empty() {
        println!("  (none)");
    }
    for event in &events {
        match event.kind {
            EventKind::ClosestApproach { distance } => println!(
                "  CLOSEST APPROACH   t={:>8.0}s   d={:>10.0} km",
                event.time,
                distance / KM
            ),
            EventKind::Separation { threshold, approaching } => println!(
                "  THRESHOLD {:>9}   t={:>8.0}s   d={:>10.0} km",
                if approaching { "INBOUND" } else { "OUTBOUND" },
                event.time,
                threshold / KM
            ),
        }
    }
    println!();

    // -----------------------------------------------------------------------
    // Summary
    // -----------------------------------------------------------------------
    let summary = json::EncounterSummary::from_scene(&scene);
    let display_pos = viewport.to_display(scene.probe().position);

    println!("  Encounter Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Closest approach:  {:>12.0} km",
        summary.closest_approach_km
    );
    println!("  Max force:         {:>12.3e} N", summary.max_force_n);
    println!("  Max speed:         {:>12.1} m/s", summary.max_speed_ms);
    println!(
        "  Final distance:    {:>12.0} km   Final speed: {:>8.1} m/s",
        summary.final_distance_km, summary.final_speed_ms
    );
    println!(
        "  Probe on display:  ({:>6.1}, {:>6.1})   r={:.2} units",
        display_pos.x,
        display_pos.y,
        viewport.display_radius(scene.probe().radius)
    );
    println!(
        "  Simulation: {} ticks, dt={} s, {:.1} h simulated",
        summary.ticks,
        config.dt(),
        summary.sim_time_s / 3600.0
    );
    println!();

    // -----------------------------------------------------------------------
    // Export
    // -----------------------------------------------------------------------
    csv::write_trails_file("flyby_trails.csv", &scene).expect("Failed to write CSV");
    json::write_summary_file("flyby_summary.json", &scene, &summary)
        .expect("Failed to write JSON");
    println!("  Exported: flyby_trails.csv, flyby_summary.json");
    println!("====================================================================");
    println!();
}
