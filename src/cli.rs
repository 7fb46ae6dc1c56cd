use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Parser;

use crate::data::DataRegistry;
use crate::server;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:4424";

#[derive(Debug, Clone, Parser)]
#[command(name = "warcry-data", version, about = "Serve Warcry fighter and warband data as JSON")]
pub struct Cli {
    /// Path to the warcry_data/data folder
    #[arg(long = "data", env = "WARCRY_DATA", value_name = "DIR")]
    pub data_root: PathBuf,

    /// Address the HTTP server binds to
    #[arg(long, env = "WARCRY_BIND", default_value = DEFAULT_BIND_ADDR)]
    pub bind: String,

    /// Print a per-warband summary and exit instead of serving
    #[arg(long)]
    pub summary: bool,
}

pub fn run_with_args(args: &[String]) -> i32 {
    match Cli::try_parse_from(args) {
        Ok(cli) => run(&cli),
        Err(err) => {
            let _ = err.print();
            err.exit_code()
        }
    }
}

pub fn run(cli: &Cli) -> i32 {
    let registry = match DataRegistry::load(&cli.data_root) {
        Ok(registry) => registry,
        Err(err) => {
            tracing::error!("failed to load data: {err}");
            eprintln!("load failed: {err}");
            return 1;
        }
    };

    if cli.summary {
        print!("{}", summary_table(&registry));
        return 0;
    }

    match server::run_server(&cli.bind, registry) {
        Ok(()) => 0,
        Err(err) => {
            tracing::error!("server error: {err}");
            1
        }
    }
}

/// Tab-separated warband counts, one row per warband plus a total row.
pub fn summary_table(registry: &DataRegistry) -> String {
    let mut out = String::from("warband\tfighters\tabilities\tbattle_traits\n");
    for warband in registry.warbands() {
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}",
            warband.name,
            warband.fighters.len(),
            warband.abilities.len(),
            warband.battle_traits.len()
        );
    }
    let battle_traits: usize = registry
        .warbands()
        .iter()
        .map(|warband| warband.battle_traits.len())
        .sum();
    let _ = writeln!(
        out,
        "total ({} warbands)\t{}\t{}\t{}",
        registry.warbands().len(),
        registry.fighters().len(),
        registry.abilities().len() - battle_traits,
        battle_traits
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Ability, Fighter};

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn data_flag_sets_data_root() {
        let cli = Cli::try_parse_from(args(&["warcry-data", "--data", "/tmp/data"]))
            .expect("args should parse");
        assert_eq!(cli.data_root, PathBuf::from("/tmp/data"));
        assert!(!cli.summary);
    }

    #[test]
    fn missing_data_root_is_a_load_failure() {
        let code = run_with_args(&args(&[
            "warcry-data",
            "--data",
            "/definitely/not/a/warcry/dir",
            "--summary",
        ]));
        assert_eq!(code, 1);
    }

    #[test]
    fn summary_counts_each_warband() {
        let fighters = vec![Fighter {
            id: "f1".to_string(),
            faction_runemark: "Ironjawz".to_string(),
            ..Fighter::default()
        }];
        let abilities = vec![
            Ability {
                id: "a1".to_string(),
                kind: "battle_trait".to_string(),
                faction_runemark: "Ironjawz".to_string(),
                ..Ability::default()
            },
            Ability {
                id: "a2".to_string(),
                kind: "double".to_string(),
                faction_runemark: "universal".to_string(),
                ..Ability::default()
            },
        ];
        let registry = DataRegistry::from_records(fighters, abilities).expect("registry");
        assert_eq!(
            summary_table(&registry),
            "warband\tfighters\tabilities\tbattle_traits\n\
             Ironjawz\t1\t0\t1\n\
             universal\t0\t1\t0\n\
             total (2 warbands)\t1\t1\t1\n"
        );
    }
}
