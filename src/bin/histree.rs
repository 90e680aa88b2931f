//! History Tree Binary
//!
//! Enumerates a reference game's history tree for one or every player,
//! computes counterfactual reach under a chosen policy, and reports the
//! requested histories and information sets.

use clap::Parser;
use clap::ValueEnum;
use histree::games::KuhnPoker;
use histree::games::LeducPoker;
use histree::games::LiarsDice;
use histree::*;
use rayon::prelude::*;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Game {
    Kuhn,
    Leduc,
    LiarsDice,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Partition {
    Responder,
    Acting,
    Everything,
}

impl From<Partition> for Grouping {
    fn from(partition: Partition) -> Self {
        match partition {
            Partition::Responder => Grouping::Responder,
            Partition::Acting => Grouping::Acting,
            Partition::Everything => Grouping::Everything,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Enumerate histories and counterfactual information sets", long_about = None)]
struct Args {
    #[arg(value_enum)]
    game: Game,
    /// Designated player; every seat when omitted
    #[arg(short, long)]
    player: Option<Player>,
    /// uniform | first | kuhn-optimal | path to a JSON policy
    #[arg(long, default_value = "uniform")]
    policy: String,
    /// Equilibrium parameter for kuhn-optimal
    #[arg(long, default_value_t = 0.)]
    alpha: Probability,
    /// Histories whose reach to print, e.g. "0, 1, 0, 1"
    #[arg(long = "history")]
    histories: Vec<String>,
    #[arg(long, value_enum, default_value_t = Partition::Responder)]
    grouping: Partition,
    /// Print every information set with its members
    #[arg(long)]
    infosets: bool,
    /// Draw the whole tree (small games only)
    #[arg(long)]
    draw: bool,
    /// Write the policy in use as JSON
    #[arg(long)]
    export_policy: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    histree::log()?;
    let args = Args::parse();
    match args.game {
        Game::Kuhn => run(KuhnPoker::default(), &args),
        Game::Leduc => run(LeducPoker::default(), &args),
        Game::LiarsDice => run(LiarsDice::default(), &args),
    }
}

fn run<S>(root: S, args: &Args) -> anyhow::Result<()>
where
    S: GameState,
{
    let policy = policy(&root, args)?;
    log::info!(
        "{} policy covers {} information states of {}",
        args.policy,
        policy.len(),
        root.name()
    );
    if let Some(path) = args.export_policy.as_ref() {
        std::fs::write(path, serde_json::to_string_pretty(&policy)?)?;
        log::info!("exported policy to {}", path.display());
    }
    let players = match args.player {
        Some(player) if player < root.num_players() => vec![player],
        Some(player) => anyhow::bail!("{} has no player {}", root.name(), player),
        None => (0..root.num_players()).collect(),
    };
    let trees = players
        .into_par_iter()
        .map(|player| HistoryTree::new(root.clone(), player))
        .collect::<anyhow::Result<Vec<_>>>()?;
    for tree in trees.iter() {
        report(tree, &policy, args)?;
    }
    Ok(())
}

fn policy<S>(root: &S, args: &Args) -> anyhow::Result<TabularPolicy>
where
    S: GameState,
{
    match args.policy.as_str() {
        "uniform" => Ok(TabularPolicy::uniform(root)),
        "first" => Ok(TabularPolicy::first_action(root)),
        "kuhn-optimal" if root.name() == KuhnPoker::default().name() => KuhnPoker::optimal(args.alpha),
        "kuhn-optimal" => anyhow::bail!("kuhn-optimal does not apply to {}", root.name()),
        path => {
            let policy = serde_json::from_str::<TabularPolicy>(&std::fs::read_to_string(path)?)?;
            policy.validate(PROBABILITY_TOLERANCE)?;
            Ok(policy)
        }
    }
}

fn report<S>(tree: &HistoryTree<S>, policy: &TabularPolicy, args: &Args) -> anyhow::Result<()>
where
    S: GameState,
{
    let player = tree.player();
    let reach = Counterfactual::new(tree, player, policy)?;
    let sets = reach.partition(args.grouping.into());
    log::info!(
        "P{}: {} histories, {} decisions, {} information sets",
        player,
        tree.num_histories(),
        reach.decisions().count(),
        sets.len()
    );
    if args.draw {
        println!("{}", tree);
    }
    if args.infosets {
        for set in sets.values() {
            print!("{}", set);
        }
    }
    for history in args.histories.iter() {
        match reach.by_history(history) {
            Some(p) => println!("P{} [{}] {:.9}", player, history, p),
            None => log::warn!("P{} [{}] is not a history of {}", player, history, tree.root().state().name()),
        }
    }
    Ok(())
}
