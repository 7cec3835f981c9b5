//! # EC3 CLI Application
//!
//! Runs the member checks of a structure file and prints a summary table,
//! the step-by-step checks of each member and, on request, the JSON results.
//!
//! ```text
//! ec3_cli [STRUCTURE.json] [--json] [--out RESULTS.json] [--save-demo PATH]
//! ```
//!
//! Without a structure file a built-in demo frame is checked. Set
//! `RUST_LOG=debug` to trace every step.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ec3_core::calculations::{BeamForces, DeflectionLimitType, LinearForceDistribution};
use ec3_core::effective_length::{ConnectionType, MemberEnd, SupportType, SwayMode};
use ec3_core::structure::{BeamDesign, ColumnDesign, TrussMemberDesign};
use ec3_core::{load_structure, save_results, save_structure, CalcError, StructureDesign, StructureMember};

#[derive(Debug, Default)]
struct Args {
    structure: Option<PathBuf>,
    json: bool,
    out: Option<PathBuf>,
    save_demo: Option<PathBuf>,
}

/// What the command line asked for
#[derive(Debug)]
enum Invocation {
    Run(Args),
    Help,
}

fn parse_args<I: IntoIterator<Item = String>>(argv: I) -> Result<Invocation, String> {
    let mut args = Args::default();
    let mut iter = argv.into_iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => args.json = true,
            "--out" => args.out = Some(iter.next().ok_or("--out needs a path")?.into()),
            "--save-demo" => args.save_demo = Some(iter.next().ok_or("--save-demo needs a path")?.into()),
            "-h" | "--help" => return Ok(Invocation::Help),
            flag if flag.starts_with("--") => return Err(format!("unknown option {}\n{}", flag, usage())),
            path => args.structure = Some(path.into()),
        }
    }
    Ok(Invocation::Run(args))
}

fn usage() -> String {
    "usage: ec3_cli [STRUCTURE.json] [--json] [--out RESULTS.json] [--save-demo PATH]".to_string()
}

/// Portal frame with a roof truss diagonal, forces from a prior analysis
fn demo_structure() -> StructureDesign {
    let mut structure = StructureDesign::new("Demo portal");

    structure.add_member(
        StructureMember::beam(
            "Rafter",
            "UB 457x191x67",
            6.0,
            BeamDesign {
                forces: BeamForces::Distribution(LinearForceDistribution::simply_supported_udl(30_000.0, 6.0)),
                restraint_positions_m: vec![0.0, 3.0, 6.0],
                deflection_limit: DeflectionLimitType::Other,
                max_deflection_mm: None,
            },
        )
        .with_grade("S275"),
    );

    structure.add_member(StructureMember::column(
        "Column",
        "UC 254x254x73",
        4.0,
        ColumnDesign {
            n_ed_kn: 1200.0,
            m_start_knm: 0.0,
            m_end_knm: 60.0,
            mz_ed_knm: 0.0,
            v_ed_kn: 15.0,
            sway_mode: SwayMode::SwayPrevented,
            start: MemberEnd::supported(SupportType::Pinned),
            end: MemberEnd::connected(ConnectionType::Continuous),
            lcr_y_m: None,
            lcr_z_m: None,
            lcr_lt_m: None,
        },
    ));

    structure.add_member(StructureMember::truss_member(
        "Diagonal",
        "SHS 100x100x5",
        3.0,
        TrussMemberDesign::from_axial_force(-150.0),
    ));

    structure
}

fn run(args: &Args) -> Result<bool, CalcError> {
    if let Some(path) = &args.save_demo {
        save_structure(&demo_structure(), path)?;
        println!("Demo structure written to {}", path.display());
        return Ok(true);
    }

    let structure = match &args.structure {
        Some(path) => load_structure(path)?,
        None => {
            println!("No structure file given. Running the built-in demo...");
            println!();
            demo_structure()
        }
    };

    let results = structure.design_all()?;

    println!("═══════════════════════════════════════════════════════════════════════════");
    println!("  EC3 MEMBER CHECKS - {} ({})", results.structure_name, results.steel_grade);
    println!("═══════════════════════════════════════════════════════════════════════════");
    println!(
        "  {:<12} {:<13} {:<18} {:>7}  {:<22} {:>6}",
        "Member", "Role", "Section", "L (m)", "Governing", "Util"
    );
    for row in results.summary_table() {
        println!(
            "  {:<12} {:<13} {:<18} {:>7.2}  {:<22} {:>6.3} {}",
            row.name,
            row.role,
            row.designation,
            row.length_m,
            row.governing_check,
            row.utilisation,
            status_icon(row.ok)
        );
    }

    for element in &results.elements {
        println!();
        println!("{} - {} {}", element.name, element.role, element.designation);
        for step in &element.steps {
            let util = step
                .utilisation
                .map(|u| format!("{:.3}", u))
                .unwrap_or_else(|| "-".to_string());
            println!("  {:>2}. {:<42} {:>7} {}", step.step_number, step.title, util, status_icon(step.ok));
        }
    }

    println!();
    println!("═══════════════════════════════════════════════════════════════════════════");
    println!("  RESULT: {}", if results.all_pass { "PASS" } else { "FAIL" });
    println!("═══════════════════════════════════════════════════════════════════════════");

    if let Some(out) = &args.out {
        save_results(&results, out)?;
        println!("Results written to {}", out.display());
    }

    if args.json {
        println!();
        println!("JSON Output:");
        if let Ok(json) = serde_json::to_string_pretty(&results) {
            println!("{}", json);
        }
    }

    Ok(results.all_pass)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(Invocation::Run(args)) => args,
        Ok(Invocation::Help) => {
            println!("{}", usage());
            return ExitCode::SUCCESS;
        }
        Err(msg) => {
            eprintln!("{}", msg);
            return ExitCode::from(2);
        }
    };

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("{} ({})", e, e.error_code());
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            if let Some(path) = args.structure.as_deref().map(Path::display) {
                eprintln!("while checking {}", path);
            }
            ExitCode::from(2)
        }
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}
