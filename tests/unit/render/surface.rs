use super::*;
use crate::{
    BackendKind, ComposeContext, CrestError, Position, RenderCaps, chevron, compose, stripe,
};

#[derive(Default)]
struct RecordingSurface {
    css_boxes: Vec<u32>,
    vectors: Vec<u32>,
    fail_on_css: bool,
}

impl DecorationSurface for RecordingSurface {
    fn draw_css_box(&mut self, item: &PlannedDecoration) -> CrestResult<()> {
        if self.fail_on_css {
            return Err(CrestError::surface("css box draw failed"));
        }
        self.css_boxes.push(item.z);
        Ok(())
    }

    fn draw_vector(&mut self, item: &PlannedDecoration) -> CrestResult<()> {
        self.vectors.push(item.z);
        Ok(())
    }
}

fn plan_for(backend: BackendKind, vector_caps: bool) -> RenderPlan {
    let ctx = ComposeContext {
        team: None,
        backend,
        caps: RenderCaps {
            supports_vector_graphics: vector_caps,
        },
    };
    compose(
        &[stripe(Position::BottomLeft), chevron(Position::BottomRight)],
        &ctx,
    )
}

#[test]
fn dom_plans_dispatch_to_the_css_box_path_in_order() {
    let plan = plan_for(BackendKind::Dom, false);
    let mut surface = RecordingSurface::default();
    execute_plan(&mut surface, &plan).unwrap();
    assert_eq!(surface.css_boxes, vec![0, 1]);
    assert!(surface.vectors.is_empty());
}

#[test]
fn native_plans_dispatch_to_the_vector_path() {
    let plan = plan_for(BackendKind::Native, true);
    let mut surface = RecordingSurface::default();
    execute_plan(&mut surface, &plan).unwrap();
    assert_eq!(surface.vectors, vec![0, 1]);
    assert!(surface.css_boxes.is_empty());
}

#[test]
fn surface_errors_propagate() {
    let plan = plan_for(BackendKind::Dom, false);
    let mut surface = RecordingSurface {
        fail_on_css: true,
        ..RecordingSurface::default()
    };
    let err = execute_plan(&mut surface, &plan).unwrap_err();
    assert!(matches!(err, CrestError::Surface(_)));
}

#[test]
fn empty_plans_draw_nothing() {
    let plan = compose(
        &[],
        &ComposeContext {
            team: None,
            backend: BackendKind::Dom,
            caps: RenderCaps::default(),
        },
    );
    let mut surface = RecordingSurface::default();
    execute_plan(&mut surface, &plan).unwrap();
    assert!(surface.css_boxes.is_empty() && surface.vectors.is_empty());
}
