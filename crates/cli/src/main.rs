use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use jboxes::boxes::{self, Anchor};
use jboxes::rand::{BoxSampler, BoxSamplerCfg};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod args;
mod output;
mod provenance;

use args::{parse_box, AlignMode, AnchorArg, Axis, Layout, LayoutBox};
use output::{BoxOut, RelateOut, SampleOut, SplitOut};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Layout calculator over integer boxes (MINX,MAXX,MINY,MAXY)")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print a box with its size and `show` rendering
    Show {
        #[arg(long = "box", value_parser = parse_box, allow_hyphen_values = true)]
        bx: LayoutBox,
    },
    /// Align INNER against OUTER
    Align {
        #[arg(long, value_parser = parse_box, allow_hyphen_values = true)]
        outer: LayoutBox,
        #[arg(long, value_parser = parse_box, allow_hyphen_values = true)]
        inner: LayoutBox,
        #[arg(long, value_enum)]
        mode: AlignMode,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset_x: i32,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset_y: i32,
    },
    /// Inset OUTER by four non-negative offsets
    Hollow {
        #[arg(long, value_parser = parse_box, allow_hyphen_values = true)]
        outer: LayoutBox,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        left: i32,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        right: i32,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        top: i32,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        bottom: i32,
    },
    /// Set the size of a box, dragging ANCHOR
    Resize {
        #[arg(long = "box", value_parser = parse_box, allow_hyphen_values = true)]
        bx: LayoutBox,
        #[arg(long, value_enum)]
        anchor: AnchorArg,
        #[arg(long, allow_negative_numbers = true)]
        width: i32,
        #[arg(long, allow_negative_numbers = true)]
        height: i32,
    },
    /// Grow or shrink a box by (DX, DY), dragging ANCHOR
    Scale {
        #[arg(long = "box", value_parser = parse_box, allow_hyphen_values = true)]
        bx: LayoutBox,
        #[arg(long, value_enum)]
        anchor: AnchorArg,
        #[arg(long, allow_negative_numbers = true)]
        dx: i32,
        #[arg(long, allow_negative_numbers = true)]
        dy: i32,
    },
    /// Split a box into two along an axis
    Split {
        #[arg(long = "box", value_parser = parse_box, allow_hyphen_values = true)]
        bx: LayoutBox,
        #[arg(long, value_enum)]
        axis: Axis,
        #[arg(long, allow_negative_numbers = true)]
        at: i32,
    },
    /// Overlap, containment and enclosing box of A and B
    Relate {
        #[arg(long, value_parser = parse_box, allow_hyphen_values = true)]
        a: LayoutBox,
        #[arg(long, value_parser = parse_box, allow_hyphen_values = true)]
        b: LayoutBox,
    },
    /// Draw reproducible random boxes
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 8)]
        count: usize,
        #[arg(
            long,
            default_value_t = BoxSamplerCfg::default().coord_min,
            allow_negative_numbers = true
        )]
        coord_min: i32,
        #[arg(
            long,
            default_value_t = BoxSamplerCfg::default().coord_max,
            allow_negative_numbers = true
        )]
        coord_max: i32,
        #[arg(long, default_value_t = BoxSamplerCfg::default().max_extent)]
        max_extent: i32,
        /// Also write the samples to this file, with a provenance sidecar
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    let cmd = Cmd::parse();
    let value = execute(cmd.action)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn execute(action: Action) -> Result<Value> {
    match action {
        Action::Show { bx } => {
            tracing::info!(%bx, "show");
            Ok(serde_json::to_value(BoxOut::of(&bx))?)
        }
        Action::Align {
            outer,
            inner,
            mode,
            offset_x,
            offset_y,
        } => {
            tracing::info!(%outer, %inner, ?mode, offset_x, offset_y, "align");
            let (horizontal, vertical) = mode.rules(offset_x, offset_y);
            let r = boxes::align(&outer, &inner, horizontal, vertical)
                .with_context(|| format!("aligning {inner} {mode:?} in {outer}"))?;
            Ok(serde_json::to_value(BoxOut::of(&r))?)
        }
        Action::Hollow {
            outer,
            left,
            right,
            top,
            bottom,
        } => {
            tracing::info!(%outer, left, right, top, bottom, "hollow");
            let r = boxes::hollow_out(&outer, left, right, top, bottom)
                .with_context(|| format!("hollowing out {outer}"))?;
            Ok(serde_json::to_value(BoxOut::of(&r))?)
        }
        Action::Resize {
            bx,
            anchor,
            width,
            height,
        } => {
            tracing::info!(%bx, ?anchor, width, height, "resize");
            let r = boxes::set_size_from(&bx, Anchor::from(anchor), width, height)
                .with_context(|| format!("resizing {bx}"))?;
            Ok(serde_json::to_value(BoxOut::of(&r))?)
        }
        Action::Scale { bx, anchor, dx, dy } => {
            tracing::info!(%bx, ?anchor, dx, dy, "scale");
            let r = boxes::scale_from(&bx, Anchor::from(anchor), dx, dy)
                .with_context(|| format!("scaling {bx}"))?;
            Ok(serde_json::to_value(BoxOut::of(&r))?)
        }
        Action::Split { bx, axis, at } => {
            tracing::info!(%bx, ?axis, at, "split");
            let out = match axis {
                Axis::Horizontal => {
                    let s = boxes::split_along_horizontal(&bx, at)?;
                    SplitOut::Horizontal {
                        upper: BoxOut::of(&s.upper),
                        lower: BoxOut::of(&s.lower),
                    }
                }
                Axis::Vertical => {
                    let s = boxes::split_along_vertical(&bx, at)?;
                    SplitOut::Vertical {
                        left: BoxOut::of(&s.left),
                        right: BoxOut::of(&s.right),
                    }
                }
            };
            Ok(serde_json::to_value(out)?)
        }
        Action::Relate { a, b } => {
            tracing::info!(%a, %b, "relate");
            let out = RelateOut {
                overlaps: boxes::overlaps(&a, &b),
                a_contains_b: boxes::contains(&a, &b),
                b_contains_a: boxes::contains(&b, &a),
                a_fits_in_b: boxes::could_fit_inside(&a, &b),
                b_fits_in_a: boxes::could_fit_inside(&b, &a),
                containing: BoxOut::of(&boxes::containing(&a, &b)?),
            };
            Ok(serde_json::to_value(out)?)
        }
        Action::Sample {
            seed,
            count,
            coord_min,
            coord_max,
            max_extent,
            out,
        } => {
            tracing::info!(seed, count, coord_min, coord_max, max_extent, "sample");
            let cfg = BoxSamplerCfg {
                coord_min,
                coord_max,
                max_extent,
            };
            let value = sample(cfg, seed, count)?;
            if let Some(path) = out {
                write_samples(&path, &value, json!({ "seed": seed, "count": count, "cfg": {
                    "coord_min": coord_min,
                    "coord_max": coord_max,
                    "max_extent": max_extent,
                }}))?;
            }
            Ok(value)
        }
    }
}

/// Upper bound on `sample --count`; the rows are held in memory before printing.
const MAX_SAMPLES: usize = 1_000_000;

fn sample(cfg: BoxSamplerCfg, seed: u64, count: usize) -> Result<Value> {
    if count > MAX_SAMPLES {
        bail!("--count {count} exceeds the limit of {MAX_SAMPLES} boxes");
    }
    let mut sampler = BoxSampler::<Layout>::new(cfg, seed).context("invalid sampler config")?;
    let mut rows = Vec::new();
    while rows.len() < count {
        let tok = sampler.peek_token();
        let Some(b) = sampler.next() else { break };
        rows.push(SampleOut {
            seed: tok.seed,
            index: tok.index,
            bx: BoxOut::of(&b),
        });
    }
    Ok(serde_json::to_value(rows)?)
}

fn write_samples(path: &Path, value: &Value, params: Value) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))?;
    let sidecar = provenance::write_sidecar(path, "sample", params)?;
    tracing::info!(out = %path.display(), sidecar = %sidecar.display(), "wrote samples");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(argv: &[&str]) -> Result<Value> {
        let cmd = Cmd::try_parse_from(std::iter::once("cli").chain(argv.iter().copied()))?;
        execute(cmd.action)
    }

    #[test]
    fn align_center_from_args() {
        let v = run(&[
            "align", "--outer", "0,100,0,100", "--inner", "0,10,0,10",
            "--mode", "horizontal-center",
        ])
        .unwrap();
        assert_eq!(v["min_x"], 45);
        assert_eq!(v["max_x"], 55);
    }

    #[test]
    fn negative_offsets_and_boxes_parse() {
        let v = run(&[
            "align", "--outer", "-10,10,-10,10", "--inner", "0,4,0,4", "--mode", "top-left",
            "--offset-x", "-2", "--offset-y", "3",
        ])
        .unwrap();
        assert_eq!(v["min_x"], -12);
        assert_eq!(v["min_y"], -7);
    }

    #[test]
    fn hollow_and_split() {
        let v = run(&[
            "hollow", "--outer", "0,99,0,99", "--left", "10", "--right", "20", "--top", "30",
            "--bottom", "40",
        ])
        .unwrap();
        assert_eq!(v["show"], "69x29 10+30");

        let v = run(&["split", "--box", "0,10,0,10", "--axis", "horizontal", "--at", "5"]).unwrap();
        assert_eq!(v["upper"]["max_y"], 5);
        assert_eq!(v["lower"]["min_y"], 5);
    }

    #[test]
    fn relate_reports_both_directions() {
        let v = run(&["relate", "--a", "0,10,0,10", "--b", "2,4,2,4"]).unwrap();
        assert_eq!(v["overlaps"], true);
        assert_eq!(v["a_contains_b"], true);
        assert_eq!(v["b_contains_a"], false);
        assert_eq!(v["containing"]["show"], "10x10 0+0");
    }

    #[test]
    fn errors_propagate() {
        assert!(run(&[
            "resize", "--box", "0,10,0,10", "--anchor", "center", "--width", "-1", "--height", "1",
        ])
        .is_err());
        assert!(run(&["hollow", "--outer", "0,10,0,10", "--left", "-1"]).is_err());
    }

    #[test]
    fn sample_is_reproducible_and_written() {
        let a = run(&["sample", "--seed", "5", "--count", "3"]).unwrap();
        let b = run(&["sample", "--seed", "5", "--count", "3"]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_array().map(Vec::len), Some(3));
        assert_eq!(a[2]["index"], 2);

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("boxes.json");
        let out_arg = out.to_string_lossy().to_string();
        run(&["sample", "--seed", "5", "--count", "3", "--out", &out_arg]).unwrap();
        let written: Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(written, a);
        assert!(dir.path().join("boxes.provenance.json").exists());
    }

    #[test]
    fn oversized_sample_count_is_an_error() {
        assert!(run(&["sample", "--count", "18446744073709551615"]).is_err());
        let err = run(&["sample", "--count", "2000000"]).unwrap_err();
        assert!(err.to_string().contains("exceeds the limit"), "{err}");

        let empty = sample(BoxSamplerCfg::default(), 0, 0).unwrap();
        assert_eq!(empty.as_array().map(Vec::len), Some(0));
    }
}
