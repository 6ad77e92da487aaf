//! Plotting observer for visualizing solver convergence.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use amoeba_core::{Model, Observer, OptimizationProblem};
use amoeba_solvers::optimization::nelder_mead;

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
/// All fields are independent with sensible defaults.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Nelder-Mead").legend().log_y())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    log_y: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend, linear scale.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            log_y: false,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Enables a logarithmic y-axis (base 10).
    ///
    /// y values are transformed with log₁₀ before plotting. Non-positive
    /// values are silently skipped.
    #[must_use]
    pub fn log_y(mut self) -> Self {
        self.log_y = true;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts plottable data from a solver event.
///
/// Return `None` from [`x`][Plottable::x] to skip the event entirely; return
/// `None` in a trace slot to skip that trace for the event.
///
/// Nelder-Mead events implement `Plottable<2>`: each ranking contributes the
/// best and worst objective at its iteration index, and evaluation events are
/// skipped.
///
/// # Example
///
/// ```ignore
/// impl Plottable<2> for MyEvent {
///     fn x(&self) -> Option<f64> {
///         Some(self.iteration as f64)
///     }
///
///     fn traces(&self) -> [Option<f64>; 2] {
///         [Some(self.objective), self.step_size]
///     }
/// }
/// ```
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    ///
    /// `None` in a slot skips that trace for this event while leaving others
    /// unaffected.
    fn traces(&self) -> [Option<f64>; N];
}

impl<M, P, const N: usize> Plottable<2> for nelder_mead::Event<'_, M, P, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    fn x(&self) -> Option<f64> {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Self::Ranked { iter, .. } => Some(*iter as f64),
            _ => None,
        }
    }

    fn traces(&self) -> [Option<f64>; 2] {
        match self {
            Self::Ranked { simplex, .. } => [
                Some(simplex.best().objective),
                Some(simplex.worst().objective),
            ],
            _ => [None, None],
        }
    }
}

/// An observer that collects trace data during solving and displays it via egui.
///
/// The const generic `N` is the number of traces. Create with
/// [`PlotObserver::new`], passing the trace names, or use
/// [`PlotObserver::convergence`] for the best and worst objective of a
/// Nelder-Mead search. Record data by either:
///
/// - **Direct path**: pass `&mut PlotObserver` as the solver observer for any
///   event type implementing [`Plottable<N>`][Plottable].
/// - **Closure path**: call [`record`][PlotObserver::record] from your own
///   observer closure, for example alongside a [`LogObserver`].
///
/// Call [`show`][PlotObserver::show] with a [`ShowConfig`] to render the result.
///
/// # Example
///
/// ```ignore
/// let mut obs = PlotObserver::convergence();
/// nelder_mead::minimize(&model, &problem, x0, &config, &mut obs)?;
/// obs.show(ShowConfig::new().title("Nelder-Mead").legend())?;
/// ```
///
/// [`LogObserver`]: crate::LogObserver
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl PlotObserver<2> {
    /// Creates an observer that traces the best and worst objective per iteration.
    #[must_use]
    pub fn convergence() -> Self {
        Self::new(["Best", "Worst"])
    }
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single data point across all traces.
    ///
    /// For each trace slot, `None` skips recording for that trace while
    /// leaving other traces unaffected.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    traces,
                    legend: config.legend,
                    log_y: config.log_y,
                }))
            }),
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to solvers that take an observer
/// by value, so [`PlotObserver::show`] can be called after the solve completes.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// The egui [`eframe::App`] that renders collected traces.
struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    legend: bool,
    log_y: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("convergence");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            if self.log_y {
                plot = plot.y_axis_label("log₁₀");
            }
            let log_y = self.log_y;
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    let plot_points: PlotPoints = if log_y {
                        points
                            .iter()
                            .filter(|p| p[1] > 0.0)
                            .map(|p| [p[0], p[1].log10()])
                            .collect()
                    } else {
                        points.iter().copied().collect()
                    };
                    plot_ui.line(Line::new(plot_points).name(name));
                }
            });
        });
    }
}
