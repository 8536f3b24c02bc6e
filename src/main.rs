use anyhow::{bail, Context, Result};
use candle_core::Device;
use clap::{Arg, ArgAction, ArgMatches, Command};
use gae_cluster::core::graph::{
    disjoint_cliques, load_csv, load_json, planted_partition, PlantedPartitionConfig,
};
use gae_cluster::{CentroidRegistry, CsvReportWriter, GaeRunner, Graph, TrainingConfig};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::path::{Path, PathBuf};

/// train / synthetic 공통 학습 옵션
fn training_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("JSON")
                .help("학습 구성 JSON 파일"),
        )
        .arg(
            Arg::new("epochs")
                .long("epochs")
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .help("학습 에폭 수"),
        )
        .arg(
            Arg::new("find-centroids-alg")
                .long("find-centroids-alg")
                .short('a')
                .value_name("STRATEGY")
                .help("centroid 선택 전략 (gae-cluster strategies 참조)"),
        )
        .arg(
            Arg::new("c-loss-gamma")
                .long("c-loss-gamma")
                .value_name("G")
                .value_parser(clap::value_parser!(f64))
                .help("클러스터링 손실 배수"),
        )
        .arg(
            Arg::new("p-interval")
                .long("p-interval")
                .value_name("P")
                .value_parser(clap::value_parser!(usize))
                .help("목표 분포 재계산 주기"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("S")
                .value_parser(clap::value_parser!(u64))
                .help("난수 시드"),
        )
        .arg(
            Arg::new("out")
                .long("out")
                .short('o')
                .value_name("DIR")
                .default_value("./output")
                .help("로그 / 스냅샷 출력 디렉토리"),
        )
}

fn main() -> Result<()> {
    let matches = Command::new("gae-cluster")
        .version(env!("CARGO_PKG_VERSION"))
        .about("그래프 어텐션 오토인코더 기반 임베딩-클러스터링 공동 학습")
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("디버그 로그 출력"),
        )
        .subcommand_required(true)
        .subcommand(training_args(
            Command::new("train")
                .about("파일 그래프로 학습")
                .arg(
                    Arg::new("graph")
                        .long("graph")
                        .short('g')
                        .required(true)
                        .value_name("FILE")
                        .help("그래프 파일 (.json 또는 간선 목록 .csv)"),
                )
                .arg(
                    Arg::new("features")
                        .long("features")
                        .value_name("CSV")
                        .help("노드 속성 CSV (간선 목록 입력일 때)"),
                )
                .arg(
                    Arg::new("labels")
                        .long("labels")
                        .value_name("CSV")
                        .help("노드 레이블 CSV (간선 목록 입력일 때)"),
                ),
        ))
        .subcommand(training_args(
            Command::new("synthetic")
                .about("합성 그래프로 학습")
                .arg(
                    Arg::new("cliques")
                        .long("cliques")
                        .value_name("K")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("2")
                        .help("클리크 / 블록 수"),
                )
                .arg(
                    Arg::new("size")
                        .long("size")
                        .value_name("S")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("5")
                        .help("클리크 / 블록 크기"),
                )
                .arg(
                    Arg::new("planted")
                        .long("planted")
                        .action(ArgAction::SetTrue)
                        .help("서로소 클리크 대신 planted partition 모델 사용"),
                ),
        ))
        .subcommand(Command::new("strategies").about("등록된 centroid 전략 목록"))
        .get_matches();

    let level = if matches.get_flag("debug") { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match matches.subcommand() {
        Some(("train", sub)) => handle_train(sub),
        Some(("synthetic", sub)) => handle_synthetic(sub),
        Some(("strategies", _)) => {
            for name in CentroidRegistry::with_builtins().names() {
                println!("{name}");
            }
            Ok(())
        }
        _ => bail!("명령을 지정해주세요. --help 를 참조하세요."),
    }
}

fn load_graph(matches: &ArgMatches) -> Result<Graph> {
    let path = PathBuf::from(required(matches, "graph")?);
    let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        return load_json(&path).with_context(|| format!("그래프 로드 실패: {}", path.display()));
    }
    let features = matches.get_one::<String>("features").map(PathBuf::from);
    let labels = matches.get_one::<String>("labels").map(PathBuf::from);
    load_csv(&path, features.as_deref(), labels.as_deref())
        .with_context(|| format!("간선 목록 로드 실패: {}", path.display()))
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a String> {
    matches
        .get_one::<String>(name)
        .with_context(|| format!("--{name} 가 필요합니다"))
}

/// 구성 파일을 읽고 명령행 값으로 덮어씀
fn training_config(matches: &ArgMatches) -> Result<TrainingConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => TrainingConfig::from_json_file(path)
            .with_context(|| format!("구성 파일 로드 실패: {path}"))?,
        None => TrainingConfig::default(),
    };
    if let Some(&epochs) = matches.get_one::<usize>("epochs") {
        config.epochs = epochs;
    }
    if let Some(name) = matches.get_one::<String>("find-centroids-alg") {
        config.find_centroids_alg = name.clone();
    }
    if let Some(&gamma) = matches.get_one::<f64>("c-loss-gamma") {
        config.c_loss_gamma = gamma;
    }
    if let Some(&interval) = matches.get_one::<usize>("p-interval") {
        config.p_interval = interval;
    }
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config.seed = Some(seed);
    }
    Ok(config)
}

fn handle_train(matches: &ArgMatches) -> Result<()> {
    let graph = load_graph(matches)?;
    run(&graph, training_config(matches)?, Path::new(required(matches, "out")?))
}

fn handle_synthetic(matches: &ArgMatches) -> Result<()> {
    let blocks = *matches.get_one::<usize>("cliques").context("--cliques")?;
    let size = *matches.get_one::<usize>("size").context("--size")?;
    let config = training_config(matches)?;

    let graph = if matches.get_flag("planted") {
        planted_partition(&PlantedPartitionConfig {
            n_blocks: blocks,
            block_size: size,
            feature_dim: blocks.max(PlantedPartitionConfig::default().feature_dim),
            seed: config.seed.unwrap_or(42),
            ..PlantedPartitionConfig::default()
        })?
    } else {
        disjoint_cliques(blocks, size)?
    };
    run(&graph, config, Path::new(required(matches, "out")?))
}

fn run(graph: &Graph, config: TrainingConfig, out: &Path) -> Result<()> {
    info!(
        "Number of nodes: {}, edges: {}, classes: {:?}",
        graph.num_nodes(),
        graph.edges().len(),
        graph.num_classes()
    );

    let registry = CentroidRegistry::with_builtins();
    let epochs = config.epochs as u64;
    let runner = GaeRunner::with_gat_encoder(config, graph, &registry, &Device::Cpu)
        .context("학습 준비 실패")?;

    let progress = ProgressBar::new(epochs);
    progress.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} epochs {msg}")
            .context("진행 표시 템플릿")?,
    );
    let report = runner
        .run_with(|loss, metrics| {
            progress.set_message(format!(
                "loss {:.4} mod {:.3}",
                loss.total_loss, metrics.modularity
            ));
            progress.inc(1);
        })
        .context("학습 실패")?;
    progress.finish();

    let mut writer = CsvReportWriter::new(out)?;
    report.publish(&mut writer)?;
    info!(
        "centroid 선택 에폭: {:?}, 결과: {}",
        report.centroid_selections,
        out.display()
    );
    Ok(())
}
