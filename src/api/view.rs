use tracing::debug;

use crate::charts::{ChartScene, ScatterChartConfig, ScatterState, render_scatter_plot};
use crate::data::{Subjects, YearlyRecord};
use crate::error::ChartResult;
use crate::interaction::{TooltipController, TooltipState};
use crate::render::Renderer;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// One mounted chart: a scene, its tooltip controller and the backend that
/// draws both.
pub struct ChartView<R: Renderer> {
    renderer: R,
    scene: ChartScene,
    tooltip: TooltipController,
}

impl<R: Renderer> ChartView<R> {
    #[must_use]
    pub fn new(renderer: R, scene: ChartScene) -> Self {
        let tooltip = scene.tooltip_controller();
        Self {
            renderer,
            scene,
            tooltip,
        }
    }

    /// Draws the scene and the current tooltip overlay.
    pub fn render(&mut self) -> ChartResult<()> {
        self.renderer.render(&self.scene.frame)?;
        self.renderer.set_tooltip(self.tooltip.state())
    }

    /// Renders the scene into an external cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        self.renderer
            .render_on_cairo_context(context, &self.scene.frame, self.tooltip.state())
    }

    /// Hit-tests the pointer and pushes the resulting tooltip to the backend.
    ///
    /// Returns the index of the hovered hit region, if any.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<Option<usize>> {
        let hit = self.tooltip.pointer_at(x, y, &self.scene.hit_regions);
        self.renderer.set_tooltip(self.tooltip.state())?;
        Ok(hit)
    }

    pub fn pointer_leave(&mut self) -> ChartResult<()> {
        self.tooltip.pointer_leave();
        self.renderer.set_tooltip(self.tooltip.state())
    }

    /// Replaces the scene and redraws everything; the tooltip starts hidden.
    pub fn set_scene(&mut self, scene: ChartScene) -> ChartResult<()> {
        self.tooltip = scene.tooltip_controller();
        self.scene = scene;
        self.render()
    }

    #[must_use]
    pub fn scene(&self) -> &ChartScene {
        &self.scene
    }

    #[must_use]
    pub fn tooltip_state(&self) -> &TooltipState {
        self.tooltip.state()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

/// Scatter chart view that owns its data and toggle state.
///
/// Every toggle rebuilds the scene from `(records, state)` and redraws it.
pub struct ScatterView<R: Renderer> {
    view: ChartView<R>,
    records: Vec<YearlyRecord>,
    subjects: Subjects,
    config: ScatterChartConfig,
    state: ScatterState,
}

impl<R: Renderer> ScatterView<R> {
    pub fn new(
        renderer: R,
        records: Vec<YearlyRecord>,
        subjects: Subjects,
        config: ScatterChartConfig,
    ) -> ChartResult<Self> {
        Self::with_state(renderer, records, subjects, config, ScatterState::default())
    }

    pub fn with_state(
        renderer: R,
        records: Vec<YearlyRecord>,
        subjects: Subjects,
        config: ScatterChartConfig,
        state: ScatterState,
    ) -> ChartResult<Self> {
        let scene = render_scatter_plot(&records, &subjects, &config, state)?;
        Ok(Self {
            view: ChartView::new(renderer, scene),
            records,
            subjects,
            config,
            state,
        })
    }

    /// Switches between assists and goals and redraws.
    pub fn toggle(&mut self) -> ChartResult<ScatterState> {
        let next = self.state.toggle();
        let scene = render_scatter_plot(&self.records, &self.subjects, &self.config, next)?;
        self.view.set_scene(scene)?;
        self.state = next;
        debug!(metric = next.metric.label(), "scatter metric toggled");
        Ok(next)
    }

    #[must_use]
    pub fn state(&self) -> ScatterState {
        self.state
    }

    #[must_use]
    pub fn view(&self) -> &ChartView<R> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ChartView<R> {
        &mut self.view
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.view.into_renderer()
    }
}
