//! Integration tests for TOML and environment configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use stride_config::StrideConfig;
use stride_core::enums::SortStrategy;

fn jailed_figment() -> Figment {
    Figment::from(Serialized::defaults(StrideConfig::default()))
        .merge(Toml::file("config.toml"))
        .merge(Env::prefixed("STRIDE_").split("__"))
}

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[sort]
strategy = "insertion"

[search]
min_energy = 350.5

[bench]
rounds = 5
chart_width = 60

[output]
path = "out/sorted.csv"
save = false
"#,
        )?;

        let config: StrideConfig = jailed_figment().extract()?;

        assert_eq!(config.sort.strategy, SortStrategy::Insertion);
        assert_eq!(config.search.min_energy, Some(350.5));
        assert_eq!(config.bench.rounds, 5);
        assert_eq!(config.bench.chart_width, 60);
        assert_eq!(config.output.path, "out/sorted.csv");
        assert!(!config.output.save);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[bench]\nrounds = 3\n")?;

        let config: StrideConfig = jailed_figment().extract()?;

        assert_eq!(config.bench.rounds, 3);
        assert_eq!(config.bench.chart_width, 40);
        assert_eq!(config.sort.strategy, SortStrategy::Merge);
        assert_eq!(config.output.path, "sorted_sessions.csv");
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[sort]\nstrategy = \"insertion\"\n")?;
        jail.set_env("STRIDE_SORT__STRATEGY", "merge");
        jail.set_env("STRIDE_BENCH__ROUNDS", "7");

        let config: StrideConfig = jailed_figment().extract()?;

        assert_eq!(config.sort.strategy, SortStrategy::Merge);
        assert_eq!(config.bench.rounds, 7);
        Ok(())
    });
}

#[test]
fn unknown_strategy_fails_extraction() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[sort]\nstrategy = \"bubble\"\n")?;

        let result = StrideConfig::from_figment(&jailed_figment());
        assert!(result.is_err());
        Ok(())
    });
}

#[test]
fn validation_runs_after_extraction() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[bench]\nchart_width = 2\n")?;

        let err = StrideConfig::from_figment(&jailed_figment()).expect_err("should reject");
        assert!(err.to_string().contains("bench.chart_width"));
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".stride")?;
        jail.create_file(".stride/config.toml", "[output]\npath = \"from-project.csv\"\n")?;

        let config = StrideConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.output.path, "from-project.csv");
        Ok(())
    });
}
