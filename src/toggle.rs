//! Hover-to-toggle boxes with a per-box cooldown.
//!
//! Each hand side owns a fixed column of boxes. Every frame the tracked
//! fingertip is tested against each box; a hovered box flips its state once
//! and then ignores further hovering until its cooldown has elapsed. Holding
//! a finger over a box therefore toggles it once per cooldown window instead
//! of once per frame.

use crate::{
    config::ToggleConfig,
    geometry::PixelPoint,
    hand::{HandSide, PerSide},
    utils::safe_cast::{u32_to_i32, usize_to_i32},
    Result,
};
use log::info;
use serde::Serialize;
use std::time::Duration;

/// Axis-aligned box in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoxRect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl BoxRect {
    /// Strict containment: points on an edge are outside.
    #[must_use]
    pub fn contains(&self, point: PixelPoint) -> bool {
        self.x1 < point.x && point.x < self.x2 && self.y1 < point.y && point.y < self.y2
    }
}

/// How a consumer should render a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BoxAppearance {
    Inactive,
    Hover,
    Active,
}

impl BoxAppearance {
    /// Active wins over hover, hover wins over inactive.
    #[must_use]
    pub fn from_state(active: bool, hovering: bool) -> Self {
        if active {
            Self::Active
        } else if hovering {
            Self::Hover
        } else {
            Self::Inactive
        }
    }
}

/// A box flipped state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToggleEvent {
    pub side: HandSide,
    pub index: usize,
    /// State after the flip
    pub active: bool,
    /// Session time of the flip
    pub at: Duration,
}

/// One toggleable region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleBox {
    index: usize,
    active: bool,
    last_toggle: Option<Duration>,
}

impl ToggleBox {
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self {
            index,
            active: false,
            last_toggle: None,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn last_toggle(&self) -> Option<Duration> {
        self.last_toggle
    }

    /// A box that has never toggled is always ready.
    #[must_use]
    pub fn cooldown_elapsed(&self, now: Duration, cooldown: Duration) -> bool {
        match self.last_toggle {
            Some(last) => now.saturating_sub(last) > cooldown,
            None => true,
        }
    }

    /// Apply one frame of hover input. Returns `true` if the box flipped.
    pub fn update(&mut self, hovering: bool, now: Duration, cooldown: Duration) -> bool {
        if hovering && self.cooldown_elapsed(now, cooldown) {
            self.active = !self.active;
            self.last_toggle = Some(now);
            true
        } else {
            false
        }
    }
}

/// Column geometry shared by both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxLayout {
    pub count: usize,
    pub width: i32,
    pub height: i32,
    pub spacing: i32,
    pub margin: i32,
    pub label_gap: i32,
}

impl BoxLayout {
    #[must_use]
    pub fn from_config(config: &ToggleConfig) -> Self {
        Self {
            count: config.box_count,
            width: config.box_width,
            height: config.box_height,
            spacing: config.box_spacing,
            margin: config.margin,
            label_gap: config.label_gap,
        }
    }

    /// Top-left corner of the first box. Left columns hug the left margin,
    /// right columns the right margin of a `frame_width` wide frame.
    ///
    /// # Errors
    ///
    /// Fails only if `frame_width` exceeds i32::MAX
    pub fn anchor(&self, side: HandSide, frame_width: u32) -> Result<PixelPoint> {
        let y = self.margin.saturating_add(self.label_gap);
        let x = match side {
            HandSide::Left => self.margin,
            HandSide::Right => u32_to_i32(frame_width)?
                .saturating_sub(self.width)
                .saturating_sub(self.margin),
        };
        Ok(PixelPoint::new(x, y))
    }

    /// Rectangle of box `index` below `anchor`.
    ///
    /// # Errors
    ///
    /// Fails only if `index` exceeds i32::MAX
    pub fn rect(&self, anchor: PixelPoint, index: usize) -> Result<BoxRect> {
        let step = self.height.saturating_add(self.spacing);
        let y1 = anchor.y.saturating_add(usize_to_i32(index)?.saturating_mul(step));
        Ok(BoxRect {
            x1: anchor.x,
            y1,
            x2: anchor.x.saturating_add(self.width),
            y2: y1.saturating_add(self.height),
        })
    }

    /// All rectangles of one side's column, top to bottom.
    ///
    /// # Errors
    ///
    /// See [`BoxLayout::anchor`] and [`BoxLayout::rect`]
    pub fn rects(&self, side: HandSide, frame_width: u32) -> Result<Vec<BoxRect>> {
        let anchor = self.anchor(side, frame_width)?;
        (0..self.count).map(|i| self.rect(anchor, i)).collect()
    }
}

/// Per-box result of one hover pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoverResult {
    pub hovering: Vec<bool>,
    pub events: Vec<ToggleEvent>,
}

/// Toggle columns for both hands.
#[derive(Debug, Clone)]
pub struct ToggleEngine {
    layout: BoxLayout,
    cooldown: Duration,
    boxes: PerSide<Vec<ToggleBox>>,
}

impl ToggleEngine {
    #[must_use]
    pub fn new(layout: BoxLayout, cooldown: Duration) -> Self {
        let boxes = PerSide::from_fn(|_| (0..layout.count).map(ToggleBox::new).collect());
        Self {
            layout,
            cooldown,
            boxes,
        }
    }

    #[must_use]
    pub fn from_config(config: &ToggleConfig) -> Self {
        Self::new(BoxLayout::from_config(config), config.cooldown())
    }

    #[must_use]
    pub fn layout(&self) -> &BoxLayout {
        &self.layout
    }

    #[must_use]
    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    #[must_use]
    pub fn boxes(&self, side: HandSide) -> &[ToggleBox] {
        &self.boxes[side]
    }

    /// Active flags of one side in box order
    #[must_use]
    pub fn states(&self, side: HandSide) -> Vec<bool> {
        self.boxes[side].iter().map(ToggleBox::is_active).collect()
    }

    /// Test `point` against every box of `side` and apply cooldown-gated flips
    ///
    /// # Errors
    ///
    /// Fails only if the frame width cannot be represented in pixel space
    pub fn process(&mut self, side: HandSide, point: PixelPoint, frame_width: u32, now: Duration) -> Result<HoverResult> {
        let rects = self.layout.rects(side, frame_width)?;
        let mut result = HoverResult {
            hovering: Vec::with_capacity(rects.len()),
            events: Vec::new(),
        };

        for (toggle_box, rect) in self.boxes[side].iter_mut().zip(&rects) {
            let hovering = rect.contains(point);
            if toggle_box.update(hovering, now, self.cooldown) {
                info!(
                    "{side} box {} toggled {}",
                    toggle_box.index() + 1,
                    if toggle_box.is_active() { "on" } else { "off" }
                );
                result.events.push(ToggleEvent {
                    side,
                    index: toggle_box.index(),
                    active: toggle_box.is_active(),
                    at: now,
                });
            }
            result.hovering.push(hovering);
        }

        Ok(result)
    }
}
