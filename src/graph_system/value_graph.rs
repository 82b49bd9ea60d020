use crate::constants::{VG_MAX_TIME_INTERVAL, VG_MAX_VALUE_INTERVAL, VG_UPDATE_FREQUENCY};

/// Growable extent of one plotted axis. Within a run `max` only ever grows
/// and `min` only ever shrinks; both snap back to the initial single-interval
/// extent on reset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphState {
    /// No samples buffered yet.
    Empty,
    /// Samples fit the current bounds; new points append incrementally.
    Steady,
    /// A bound changed; the rendered path is stale until the collaborator
    /// acknowledges the replot signal.
    Rescaling,
}

/// What the engine did with one offered sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleOutcome {
    /// Offered before the sampling interval elapsed; not buffered.
    Skipped,
    /// Buffered; bounds unchanged, so the renderer may extend its path by
    /// projecting just this point.
    Appended,
    /// Buffered, and a bound grew: every buffered point must be re-projected
    /// through the new scales.
    Rescaled,
}

/// Plots one scalar signal against elapsed simulation time, growing its axis
/// bounds as data arrives instead of deriving them up front.
///
/// The value axis doubles its extent whenever a sample lands outside it, with
/// independent growth above and below zero, so a monotonically growing signal
/// forces only logarithmically many full replots. The time axis grows by a
/// fixed interval instead, since elapsed time advances at a known rate and
/// doubling would waste plot area. Both kinds of growth invalidate the
/// rendered path; between them, appending one point is O(1).
#[derive(Debug)]
pub struct ValueGraph {
    plot_width: f64,  // px
    plot_height: f64, // px
    base_value_interval: f64,
    base_time_interval: f64, // s
    update_frequency: f64,   // s of simulation time between samples
    pub value_bounds: AxisBounds,
    pub time_bounds: AxisBounds,
    /// px per value unit at the current bounds.
    pub value_scale: f64,
    /// px per second at the current bounds.
    pub time_scale: f64,
    /// Fraction of the plot height that sits below the value-axis zero line;
    /// zero need not be at either edge once the axis has grown downward.
    pub origin_location: f64,
    upper_power: i32,
    lower_power: i32,
    data_points: Vec<(f64, f64)>,
    last_sample_time: f64,
    replot_needed: bool,
    state: GraphState,
}

impl ValueGraph {
    pub fn new(plot_width: f64, plot_height: f64) -> Self {
        Self::with_intervals(
            plot_width,
            plot_height,
            VG_MAX_VALUE_INTERVAL,
            VG_MAX_TIME_INTERVAL,
            VG_UPDATE_FREQUENCY,
        )
    }

    pub fn with_intervals(
        plot_width: f64,
        plot_height: f64,
        base_value_interval: f64,
        base_time_interval: f64,
        update_frequency: f64,
    ) -> Self {
        let mut graph = ValueGraph {
            plot_width,
            plot_height,
            base_value_interval,
            base_time_interval,
            update_frequency,
            value_bounds: AxisBounds { min: 0.0, max: base_value_interval },
            time_bounds: AxisBounds { min: 0.0, max: base_time_interval },
            value_scale: 0.0,
            time_scale: 0.0,
            origin_location: 0.0,
            upper_power: 0,
            lower_power: 0,
            data_points: Vec::new(),
            last_sample_time: 0.0,
            replot_needed: false,
            state: GraphState::Empty,
        };
        graph.recompute_scales();
        graph
    }

    pub fn state(&self) -> GraphState {
        self.state
    }

    pub fn data_points(&self) -> &[(f64, f64)] {
        self.data_points.as_slice()
    }

    /// Offer a sample of the plotted signal at the given elapsed simulation
    /// time. Samples are only taken once `update_frequency` of simulation
    /// time has passed since the last one, so the cadence is reproducible
    /// under any frame rate.
    pub fn sample(&mut self, elapsed_time: f64, value: f64) -> SampleOutcome {
        if elapsed_time - self.last_sample_time <= self.update_frequency {
            return SampleOutcome::Skipped;
        }

        let value_grew = self.grow_value_bounds(value);
        let time_grew = self.grow_time_bounds(elapsed_time);
        let rescaled = value_grew || time_grew;
        if rescaled {
            self.recompute_scales();
            self.replot_needed = true;
            self.state = GraphState::Rescaling;
        } else if self.state == GraphState::Empty {
            self.state = GraphState::Steady;
        }

        self.data_points.push((elapsed_time, value));
        self.last_sample_time = elapsed_time;

        if rescaled {
            SampleOutcome::Rescaled
        } else {
            SampleOutcome::Appended
        }
    }

    /// Exponential growth above and below the current extent, with separate
    /// counters: a decelerating signal may only ever grow downward, and its
    /// upper headroom should not double along with the lower.
    fn grow_value_bounds(&mut self, value: f64) -> bool {
        let mut changed = false;

        while value > self.value_bounds.max {
            self.upper_power += 1;
            self.value_bounds.max = self.base_value_interval * 2_f64.powi(self.upper_power);
            changed = true;
        }

        while value < self.value_bounds.min {
            self.value_bounds.min = -self.base_value_interval * 2_f64.powi(self.lower_power);
            self.lower_power += 1;
            changed = true;
        }

        changed
    }

    /// Linear growth: another base interval is tacked on whenever elapsed
    /// time runs off the right edge.
    fn grow_time_bounds(&mut self, elapsed_time: f64) -> bool {
        let mut changed = false;

        while elapsed_time > self.time_bounds.max {
            self.time_bounds.max += self.base_time_interval;
            changed = true;
        }

        changed
    }

    fn recompute_scales(&mut self) {
        self.value_scale = self.plot_height / self.value_bounds.span();
        self.time_scale = self.plot_width / self.time_bounds.span();
        self.origin_location = self.value_bounds.min.abs() / self.value_bounds.span();
    }

    /// One-shot replot signal. A rendering collaborator polls this after
    /// offering a sample: true means the current path is stale and every
    /// buffered point must be re-projected; the flag clears on read and the
    /// engine settles back to steady appending.
    pub fn take_replot(&mut self) -> bool {
        let needed = self.replot_needed;
        self.replot_needed = false;
        if self.state == GraphState::Rescaling {
            self.state = GraphState::Steady;
        }
        needed
    }

    /// Project a buffered sample into plot coordinates under the current
    /// scales, measured from the bottom-left plot corner. The value-axis zero
    /// line sits at `origin_location * plot_height`.
    pub fn project(&self, time: f64, value: f64) -> (f64, f64) {
        (
            (time - self.time_bounds.min) * self.time_scale,
            (value - self.value_bounds.min) * self.value_scale,
        )
    }

    /// Clear the buffer and collapse both axes back to their single-interval
    /// extents, ready for a fresh run.
    pub fn reset(&mut self) {
        self.value_bounds = AxisBounds { min: 0.0, max: self.base_value_interval };
        self.time_bounds = AxisBounds { min: 0.0, max: self.base_time_interval };
        self.upper_power = 0;
        self.lower_power = 0;
        self.data_points.clear();
        self.last_sample_time = 0.0;
        self.replot_needed = false;
        self.state = GraphState::Empty;
        self.recompute_scales();
    }
}
