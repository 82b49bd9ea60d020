use freefall_simulation::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut clock = SimulationClock::new(DEFAULT_OBJECT_TYPE, ModelConfig::terminal())?;

    let mut velocity_graph = ValueGraph::new(VG_PLOT_WIDTH, VG_PLOT_HEIGHT);
    let mut position_graph = ValueGraph::new(VG_PLOT_WIDTH, VG_PLOT_HEIGHT);

    println!(
        "Dropping a {} from {:.1} m with drag enabled",
        clock.body.object_type.name(),
        clock.body.position
    );

    clock.play();
    let mut frame = 0_u64;
    while clock.enabled {
        clock.step(STEP_DT);
        frame += 1;

        // Plot velocity with inverted polarity so falling traces upward
        let velocity_outcome = velocity_graph.sample(clock.elapsed_time, -clock.body.velocity);
        position_graph.sample(clock.elapsed_time, clock.body.position);

        if velocity_outcome == SampleOutcome::Rescaled && velocity_graph.take_replot() {
            println!(
                "t={:.2}s | velocity axis rescaled to [{:.0}, {:.0}], replotting {} points",
                clock.elapsed_time,
                velocity_graph.value_bounds.min,
                velocity_graph.value_bounds.max,
                velocity_graph.data_points().len()
            );
        }

        if frame % 30 == 0 {
            println!(
                "t={:.2}s | alt: {:.3} m | vel: {:.3} m/s | drag: {:.4} N",
                clock.elapsed_time, clock.body.position, clock.body.velocity, clock.body.drag_force
            );
        }
    }

    println!(
        "\nGround reached at t={:.2}s after {} frames",
        clock.elapsed_time, frame
    );
    println!(
        "Velocity graph: {} samples, bounds [{:.0}, {:.0}]",
        velocity_graph.data_points().len(),
        velocity_graph.value_bounds.min,
        velocity_graph.value_bounds.max
    );
    println!(
        "Position graph: {} samples, bounds [{:.0}, {:.0}]",
        position_graph.data_points().len(),
        position_graph.value_bounds.min,
        position_graph.value_bounds.max
    );

    Ok(())
}
