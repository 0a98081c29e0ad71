//! Command-line spellings of boxes, alignment modes, anchors and axes.

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use jboxes::boxes::{Align, Anchor};
use jboxes::Box2;

/// Coordinate space of every box handled by the CLI.
#[derive(Debug)]
pub enum Layout {}

pub type LayoutBox = Box2<Layout>;

/// Parse `MINX,MAXX,MINY,MAXY`.
pub fn parse_box(s: &str) -> Result<LayoutBox> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        bail!("expected MINX,MAXX,MINY,MAXY, got {s:?}");
    }
    let mut v = [0i32; 4];
    for (slot, part) in v.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .with_context(|| format!("bound {part:?} in {s:?} is not an i32"))?;
    }
    Ok(Box2::of(v[0], v[1], v[2], v[3])?)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlignMode {
    Left,
    Right,
    Top,
    Bottom,
    HorizontalCenter,
    VerticalCenter,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
}

impl AlignMode {
    /// Per-axis rules; `dx`/`dy` are the offsets from the chosen edges.
    pub fn rules(self, dx: i32, dy: i32) -> (Align, Align) {
        use Align::{Center, End, Keep, Start};
        match self {
            AlignMode::Left => (Start(dx), Keep),
            AlignMode::Right => (End(dx), Keep),
            AlignMode::Top => (Keep, Start(dy)),
            AlignMode::Bottom => (Keep, End(dy)),
            AlignMode::HorizontalCenter => (Center, Keep),
            AlignMode::VerticalCenter => (Keep, Center),
            AlignMode::TopLeft => (Start(dx), Start(dy)),
            AlignMode::TopRight => (End(dx), Start(dy)),
            AlignMode::BottomLeft => (Start(dx), End(dy)),
            AlignMode::BottomRight => (End(dx), End(dy)),
            AlignMode::Center => (Center, Center),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AnchorArg {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
}

impl From<AnchorArg> for Anchor {
    fn from(a: AnchorArg) -> Self {
        match a {
            AnchorArg::TopLeft => Anchor::TopLeft,
            AnchorArg::TopRight => Anchor::TopRight,
            AnchorArg::BottomLeft => Anchor::BottomLeft,
            AnchorArg::BottomRight => Anchor::BottomRight,
            AnchorArg::Center => Anchor::Center,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Axis {
    Horizontal,
    Vertical,
}
