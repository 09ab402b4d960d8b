use crate::{
    compose::plan::{PlannedDecoration, RenderPlan, RenderStrategy},
    foundation::error::CrestResult,
};

/// Capability interface a host backend implements to draw a [`RenderPlan`].
///
/// The compositor never touches a UI runtime; it only tags each planned
/// decoration with a strategy. The host maps [`crate::ComponentRef`] variants
/// to its real drawing code behind this trait, which keeps the engine
/// unit-testable without any rendering stack.
pub trait DecorationSurface {
    /// Draw one decoration as a styled rectangle / inline markup.
    fn draw_css_box(&mut self, item: &PlannedDecoration) -> CrestResult<()>;

    /// Draw one decoration through the vector-graphics path.
    fn draw_vector(&mut self, item: &PlannedDecoration) -> CrestResult<()>;
}

/// Walk a plan in stacking order and dispatch each item to the surface method
/// matching its strategy. Surface errors propagate; the plan itself adds none.
pub fn execute_plan<B: DecorationSurface + ?Sized>(
    surface: &mut B,
    plan: &RenderPlan,
) -> CrestResult<()> {
    for item in &plan.items {
        match item.strategy {
            RenderStrategy::CssBox => surface.draw_css_box(item)?,
            RenderStrategy::VectorGraphics => surface.draw_vector(item)?,
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
