use rodcut::{bottom_up, top_down, BottomUp, CutStrategy, SolverBuilder, Strategy, TopDown};

fn check_all<S: CutStrategy>(strategy: S) {
    let s = strategy.solve(5, &[2, 5, 7, 8, 10]).unwrap();
    assert_eq!(s.max_profit, 12, "{}", strategy.name());
    assert_eq!(s.cuts.iter().sum::<usize>(), 5);

    let s = strategy.solve(3, &[1, 3, 8]).unwrap();
    assert_eq!(s.max_profit, 8, "{}", strategy.name());
    assert_eq!(s.cuts, vec![3]);
    assert_eq!(s.number_of_cuts, 0);

    let s = strategy.solve(4, &[3, 5, 6, 7]).unwrap();
    assert_eq!(s.max_profit, 12, "{}", strategy.name());
    assert_eq!(s.cuts, vec![1, 1, 1, 1]);
    assert_eq!(s.number_of_cuts, 3);
}

#[test]
fn both_strategies_reproduce_reference_scenarios() {
    check_all(TopDown);
    check_all(BottomUp);
}

#[test]
fn free_functions_match_trait_objects() {
    let prices = [2, 5, 7, 8, 10];
    assert_eq!(
        top_down::solve(5, &prices).unwrap(),
        TopDown.solve(5, &prices).unwrap()
    );
    assert_eq!(
        bottom_up::solve(5, &prices).unwrap(),
        BottomUp.solve(5, &prices).unwrap()
    );
}

#[test]
fn strategies_usable_as_dyn() {
    let strategies: Vec<Box<dyn CutStrategy>> = vec![Box::new(TopDown), Box::new(BottomUp)];
    let names: Vec<_> = strategies.iter().map(|s| s.name()).collect();
    assert_eq!(names, ["top_down", "bottom_up"]);
    for s in &strategies {
        assert_eq!(s.solve(4, &[3, 5, 6, 7]).unwrap().max_profit, 12);
    }
}

#[test]
fn builder_strategies_agree_on_profit() {
    let prices: Vec<i64> = vec![1, 5, 8, 9, 10, 17, 17, 20];
    let mut profits = Vec::new();
    for strategy in [Strategy::TopDown, Strategy::BottomUp, Strategy::Auto] {
        let solver = SolverBuilder::new().with_strategy(strategy).build();
        profits.push(solver.solve(8, &prices).unwrap().max_profit);
    }
    assert_eq!(profits, vec![22, 22, 22]);
}
