use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["resto-reco"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
    assert!(cli.data_dir.is_none());
}

#[test]
fn data_dir_is_global() {
    let cli = Cli::try_parse_from(["resto-reco", "restos", "list", "--data-dir", "/tmp/reco"])
        .expect("expected valid cli args");
    assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/reco")));
}

#[test]
fn parses_restos_list() {
    let cli = Cli::try_parse_from(["resto-reco", "restos", "list"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Restos {
            command: ListCommands::List { json: false }
        })
    ));
}

#[test]
fn parses_gustos_list_json() {
    let cli = Cli::try_parse_from(["resto-reco", "gustos", "list", "--json"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Gustos {
            command: ListCommands::List { json: true }
        })
    ));
}

#[test]
fn parses_recommend_for_stored_gusto() {
    let cli = Cli::try_parse_from(["resto-reco", "recommend", "--gusto", "solo"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Recommend(RecommendArgs { gusto: Some(ref g), meal: None, .. })) if g == "solo"
    ));
}

#[test]
fn parses_ad_hoc_recommend_flags() {
    let cli = Cli::try_parse_from([
        "resto-reco",
        "recommend",
        "--meal",
        "Dinner",
        "--group-size",
        "4",
        "--budget",
        "1200",
        "--cuisine",
        "thai",
        "--cuisine",
        "middle eastern",
        "--min-rating",
        "3.5",
    ])
    .unwrap();
    let Some(Commands::Recommend(args)) = cli.command else {
        panic!("expected recommend command");
    };
    assert_eq!(args.meal, Some(MealType::Dinner));
    assert_eq!(args.group_size, Some(4));
    assert_eq!(args.budget, Some(Decimal::from(1200)));
    assert_eq!(args.cuisine, vec![Cuisine::Thai, Cuisine::MiddleEastern]);
    assert_eq!(args.min_rating, Some(3.5));
    assert!(args.max_distance.is_none());
}

#[test]
fn recommend_needs_gusto_or_meal() {
    assert!(Cli::try_parse_from(["resto-reco", "recommend"]).is_err());
}

#[test]
fn gusto_conflicts_with_ad_hoc_flags() {
    assert!(
        Cli::try_parse_from(["resto-reco", "recommend", "--gusto", "solo", "--meal", "lunch"])
            .is_err()
    );
}

#[test]
fn unknown_cuisine_is_rejected() {
    assert!(
        Cli::try_parse_from(["resto-reco", "recommend", "--meal", "lunch", "--cuisine", "martian"])
            .is_err()
    );
}

#[test]
fn budget_keeps_exact_cents() {
    let cli = Cli::try_parse_from([
        "resto-reco",
        "recommend",
        "--meal",
        "lunch",
        "--budget",
        "8.85",
    ])
    .unwrap();
    let Some(Commands::Recommend(args)) = cli.command else {
        panic!("expected recommend command");
    };
    assert_eq!(args.budget, Some(Decimal::new(885, 2)));
}
