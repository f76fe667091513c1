//! Pointer interaction: hit regions, hover state and tooltip events.
//!
//! Every data point gets a [`HitRegion`], a vertical strip around its anchor
//! spanning the full plot height. An [`InteractionLayer`] owns one
//! [`HoverState`] per region and the chart's [`Tooltip`], and turns pointer
//! events into [`TooltipEvent`]s.
//!
//! Regions stack in dataset order, so the last point is on top. Hit testing
//! walks from the top down and the first match wins. At most one region is
//! hovered at a time: moving straight from one region into another emits a
//! `Hide` for the old one before the `Show` for the new one.

use crate::color::Rgba;
use crate::data::format_value;
use crate::geometry::{Point, Rect};
use crate::plots::Anchor;
use crate::render::{Group, Node, RectNode};

/// Default half width of a hit region in pixels.
pub const DEFAULT_HIT_HALF_WIDTH: f32 = 5.0;

/// Default tooltip offset from the pointer.
pub const DEFAULT_TOOLTIP_OFFSET: Point = Point::new(10.0, -28.0);

/// Pointer-sensitive strip bound to one data point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRegion {
    /// Position of the point in the dataset.
    pub index: usize,
    /// Anchor pixel the strip is centred on.
    pub anchor: Point,
    /// Y value shown in the tooltip.
    pub value: f64,
    /// Strip bounds in plot coordinates.
    pub bounds: Rect,
}

impl HitRegion {
    /// Tooltip text for this region.
    #[must_use]
    pub fn tooltip_content(&self) -> String {
        format!("Value: {}", format_value(self.value))
    }
}

/// One strip per anchor: `[x - half_width, x + half_width] x [0, inner_height]`.
#[must_use]
pub fn build_hit_regions(anchors: &[Anchor], inner_height: f32, half_width: f32) -> Vec<HitRegion> {
    anchors
        .iter()
        .map(|a| HitRegion {
            index: a.index,
            anchor: a.point,
            value: a.value,
            bounds: Rect::new(a.point.x - half_width, 0.0, 2.0 * half_width, inner_height),
        })
        .collect()
}

/// Transparent `hover-area` rectangles, one per region, in stacking order.
#[must_use]
pub fn hit_region_node(regions: &[HitRegion]) -> Node {
    Group::new("hover-areas")
        .children(regions.iter().map(|r| {
            RectNode::new("hover-area", r.bounds, Rgba::TRANSPARENT).data_index(r.index)
        }))
        .into()
}

/// Hover state of one region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HoverState {
    /// Pointer is elsewhere.
    #[default]
    Idle,
    /// Pointer is inside the region.
    Hovered,
}

/// Pointer input in outer chart coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved to a position.
    Move(Point),
    /// Pointer left the chart surface.
    Leave,
}

/// Tooltip instruction produced by a hover transition.
#[derive(Debug, Clone, PartialEq)]
pub enum TooltipEvent {
    /// Show the tooltip for a data point.
    Show {
        /// Position of the point in the dataset.
        index: usize,
        /// Text to display.
        content: String,
        /// Where to put the tooltip, in outer chart coordinates.
        position: Point,
    },
    /// Hide the tooltip shown for a data point.
    Hide {
        /// Position of the point in the dataset.
        index: usize,
    },
}

/// Tooltip state owned by one chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tooltip {
    /// Whether the tooltip is shown.
    pub visible: bool,
    /// Last content shown.
    pub content: String,
    /// Last position shown at.
    pub position: Point,
}

impl Tooltip {
    fn apply(&mut self, event: &TooltipEvent) {
        match event {
            TooltipEvent::Show {
                content, position, ..
            } => {
                self.visible = true;
                self.content.clone_from(content);
                self.position = *position;
            }
            TooltipEvent::Hide { .. } => self.visible = false,
        }
    }
}

/// Hover state machine for one rendered chart.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionLayer {
    regions: Vec<HitRegion>,
    states: Vec<HoverState>,
    origin: Point,
    tooltip_offset: Point,
    tooltip: Tooltip,
}

impl InteractionLayer {
    /// Layer over `regions`, whose plot area starts at `origin` in outer
    /// coordinates.
    #[must_use]
    pub fn new(regions: Vec<HitRegion>, origin: Point, tooltip_offset: Point) -> Self {
        Self {
            states: vec![HoverState::Idle; regions.len()],
            regions,
            origin,
            tooltip_offset,
            tooltip: Tooltip::default(),
        }
    }

    /// Feed one pointer event and return the tooltip events it causes.
    pub fn handle(&mut self, event: PointerEvent) -> Vec<TooltipEvent> {
        let (target, pointer) = match event {
            PointerEvent::Move(p) => (self.hit_test(p.relative_to(self.origin)), p),
            PointerEvent::Leave => (None, Point::ORIGIN),
        };
        let current = self.hovered_slot();
        if target == current {
            return Vec::new();
        }

        let mut events = Vec::with_capacity(2);
        if let Some(slot) = current {
            self.states[slot] = HoverState::Idle;
            let index = self.regions[slot].index;
            tracing::trace!(index, "hover left region");
            events.push(TooltipEvent::Hide { index });
        }
        if let Some(slot) = target {
            self.states[slot] = HoverState::Hovered;
            let region = &self.regions[slot];
            tracing::trace!(index = region.index, "hover entered region");
            events.push(TooltipEvent::Show {
                index: region.index,
                content: region.tooltip_content(),
                position: pointer.offset(self.tooltip_offset),
            });
        }

        for event in &events {
            self.tooltip.apply(event);
        }
        events
    }

    /// Topmost region containing `point` (plot coordinates), as a slot in
    /// [`regions`](Self::regions).
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.regions.iter().rposition(|r| r.bounds.contains(point))
    }

    /// Region currently hovered.
    #[must_use]
    pub fn hovered(&self) -> Option<&HitRegion> {
        self.hovered_slot().map(|slot| &self.regions[slot])
    }

    fn hovered_slot(&self) -> Option<usize> {
        self.states.iter().position(|s| *s == HoverState::Hovered)
    }

    /// State of every region, in stacking order.
    #[must_use]
    pub fn states(&self) -> &[HoverState] {
        &self.states
    }

    /// Regions in stacking order.
    #[must_use]
    pub fn regions(&self) -> &[HitRegion] {
        &self.regions
    }

    /// This chart's tooltip.
    #[must_use]
    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_anchor_always_hits(
            xs in prop::collection::vec(0.0f32..1000.0, 1..40),
            height in 1.0f32..1000.0,
            fy in 0.0f32..1.0
        ) {
            let anchors: Vec<Anchor> = xs
                .iter()
                .enumerate()
                .map(|(i, &x)| Anchor {
                    index: i,
                    point: Point::new(x, fy * height),
                    value: 0.0,
                })
                .collect();
            let layer = InteractionLayer::new(
                build_hit_regions(&anchors, height, DEFAULT_HIT_HALF_WIDTH),
                Point::ORIGIN,
                DEFAULT_TOOLTIP_OFFSET,
            );
            for a in &anchors {
                let slot = layer.hit_test(a.point);
                prop_assert!(slot.is_some());
            }
        }

        #[test]
        fn prop_at_most_one_hovered(
            moves in prop::collection::vec((0.0f32..100.0, 0.0f32..60.0), 1..50)
        ) {
            let anchors: Vec<Anchor> = (0..10)
                .map(|i| Anchor {
                    index: i,
                    point: Point::new(i as f32 * 8.0, 5.0),
                    value: i as f64,
                })
                .collect();
            let mut layer = InteractionLayer::new(
                build_hit_regions(&anchors, 50.0, DEFAULT_HIT_HALF_WIDTH),
                Point::ORIGIN,
                DEFAULT_TOOLTIP_OFFSET,
            );
            for (x, y) in moves {
                layer.handle(PointerEvent::Move(Point::new(x, y)));
                let hovered = layer
                    .states()
                    .iter()
                    .filter(|s| **s == HoverState::Hovered)
                    .count();
                prop_assert!(hovered <= 1);
                prop_assert_eq!(hovered == 1, layer.tooltip().visible);
            }
        }
    }
}
