use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;
use vankampen::api::{
    discriminant_points, generic_position, group_summary, segments, AlgebraicPoint, BiPoly,
    GroupOptions, ZvkCfg,
};

mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Braid monodromy and curve complement groups")]
struct Cmd {
    /// Log filter when RUST_LOG is unset (e.g. "info", "vankampen=debug")
    #[arg(long, default_value = "warn")]
    log: String,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Fundamental group of the complement of f(x, y) = 0
    Group {
        #[arg(long)]
        poly: String,
        /// Group of the projective closure
        #[arg(long)]
        projective: bool,
        /// Skip Tietze simplification
        #[arg(long)]
        raw: bool,
        #[arg(long)]
        max_prec: Option<u32>,
        /// Process segments on one thread
        #[arg(long)]
        sequential: bool,
        /// Write JSON here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Branch points of the projection to x
    Disc {
        #[arg(long)]
        poly: String,
    },
    /// Voronoi path network around the branch points
    Segments {
        #[arg(long)]
        poly: String,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Debug, Serialize)]
struct GroupReport {
    poly: String,
    generic: String,
    degree: usize,
    branch_points: usize,
    generators: usize,
    relators: Vec<String>,
    abelian_invariants: Vec<u64>,
    presentation: String,
}

#[derive(Debug, Serialize)]
struct PointReport {
    re: f64,
    im: f64,
    radius: f64,
}

impl From<&AlgebraicPoint> for PointReport {
    fn from(p: &AlgebraicPoint) -> Self {
        Self {
            re: p.approx().re,
            im: p.approx().im,
            radius: p.radius(),
        }
    }
}

#[derive(Debug, Serialize)]
struct NetworkReport {
    vertices: Vec<[f64; 2]>,
    segments: Vec<[usize; 2]>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cmd.log));
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .init();
    match cmd.action {
        Action::Group {
            poly,
            projective,
            raw,
            max_prec,
            sequential,
            out,
        } => {
            let opts = GroupOptions {
                simplified: !raw,
                projective,
            };
            let mut cfg = ZvkCfg::default();
            if let Some(p) = max_prec {
                cfg.max_prec = p;
            }
            cfg.parallel = !sequential;
            let report = group(&poly, opts, &cfg)?;
            match out {
                Some(path) => write_report(&path, &report, &opts, &cfg),
                None => print_json(&report),
            }
        }
        Action::Disc { poly } => {
            let cfg = ZvkCfg::default();
            let f = generic_position(&parse(&poly)?, false, &cfg)?;
            let pts: Vec<PointReport> = discriminant_points(&f, &cfg)?
                .iter()
                .map(PointReport::from)
                .collect();
            print_json(&pts)
        }
        Action::Segments { poly } => print_json(&network(&poly, &ZvkCfg::default())?),
        Action::Report => print_json(&provenance::Sidecar::bare()),
    }
}

fn parse(poly: &str) -> Result<BiPoly> {
    poly.parse().with_context(|| format!("parsing polynomial {poly:?}"))
}

fn group(poly: &str, opts: GroupOptions, cfg: &ZvkCfg) -> Result<GroupReport> {
    let s = group_summary(&parse(poly)?, opts, cfg)?;
    tracing::info!(poly, generic = %s.generic, branch_points = s.branch_points, "group computed");
    let p = &s.presentation;
    Ok(GroupReport {
        poly: poly.to_string(),
        generic: s.generic.to_string(),
        degree: s.degree(),
        branch_points: s.branch_points,
        generators: p.ngens(),
        relators: p.relators().iter().map(|r| r.to_string()).collect(),
        abelian_invariants: p.abelian_invariants(),
        presentation: p.to_string(),
    })
}

fn network(poly: &str, cfg: &ZvkCfg) -> Result<NetworkReport> {
    let f = generic_position(&parse(poly)?, false, cfg)?;
    let pts: Vec<_> = discriminant_points(&f, cfg)?
        .iter()
        .map(AlgebraicPoint::approx)
        .collect();
    let net = segments(&pts, cfg);
    Ok(NetworkReport {
        vertices: net.vertices.iter().map(|z| [z.re, z.im]).collect(),
        segments: net.segments.iter().map(|s| [s.from, s.to]).collect(),
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn write_report(path: &Path, report: &GroupReport, opts: &GroupOptions, cfg: &ZvkCfg) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(path, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {}", path.display()))?;
    let params = serde_json::json!({
        "poly": report.poly,
        "simplified": opts.simplified,
        "projective": opts.projective,
        "max_prec": cfg.max_prec,
        "parallel": cfg.parallel,
    });
    let sidecar = provenance::write_sidecar(path, params)?;
    tracing::info!(out = %path.display(), sidecar = %sidecar.display(), "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_report_for_a_line() {
        let r = group("y - x", GroupOptions::default(), &ZvkCfg::default()).unwrap();
        assert_eq!(r.degree, 1);
        assert_eq!(r.branch_points, 0);
        assert_eq!(r.generators, 1);
        assert!(r.relators.is_empty());
        assert_eq!(r.abelian_invariants, vec![0]);
    }

    #[test]
    fn group_report_counts_branch_points_once() {
        let r = group("y^2 - x", GroupOptions::default(), &ZvkCfg::default()).unwrap();
        assert_eq!(r.degree, 2);
        assert_eq!(r.branch_points, 1);
        assert_eq!(r.generic, "y^2 - x");
        assert_eq!(r.abelian_invariants, vec![0]);
    }

    #[test]
    fn gaussian_polynomial_is_accepted() {
        let r = group("y^2 - x + I", GroupOptions::default(), &ZvkCfg::default()).unwrap();
        assert_eq!(r.generic, "y^2 - x + I");
        assert_eq!(r.branch_points, 1);
    }

    #[test]
    fn network_report_around_one_branch_point() {
        let r = network("y^2 - x", &ZvkCfg::default()).unwrap();
        assert_eq!(r.vertices.len(), 4);
        assert_eq!(r.segments.len(), 4);
    }

    #[test]
    fn bad_polynomial_is_reported_with_context() {
        let err = parse("y^").unwrap_err();
        assert!(format!("{err:#}").contains("parsing polynomial"));
    }

    #[test]
    fn flags_map_onto_options() {
        let cmd = Cmd::try_parse_from([
            "cli", "group", "--poly", "y^2 - x^3", "--raw", "--projective", "--max-prec", "256",
        ])
        .unwrap();
        match cmd.action {
            Action::Group {
                raw,
                projective,
                max_prec,
                sequential,
                out,
                ..
            } => {
                assert!(raw && projective && !sequential);
                assert_eq!(max_prec, Some(256));
                assert!(out.is_none());
            }
            _ => panic!("expected the group subcommand"),
        }
    }

    #[test]
    fn written_report_gets_a_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("runs").join("line.json");
        let cfg = ZvkCfg::default();
        let report = group("y - x", GroupOptions::default(), &cfg).unwrap();
        write_report(&out, &report, &GroupOptions::default(), &cfg).unwrap();
        assert!(out.exists());
        assert!(dir.path().join("runs").join("line.provenance.json").exists());
    }
}
