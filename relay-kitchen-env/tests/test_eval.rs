use anyhow::Result;
use csv::WriterBuilder;
use relay_core::{
    record::{BufferedRecorder, NullRecorder, Record},
    util, DefaultEvaluator, Env as _, Evaluator,
};
use relay_kitchen_env::{
    util::test::{env_config, Env, RandomPolicy},
    KitchenEvaluator,
};
use serde::Serialize;
use std::{convert::TryFrom, fs::File};
use tempdir::TempDir;

#[derive(Debug, Serialize)]
struct KitchenStepRecord {
    episode: usize,
    step: usize,
    reward: f32,
    backend_steps: usize,
}

impl TryFrom<&Record> for KitchenStepRecord {
    type Error = anyhow::Error;

    fn try_from(record: &Record) -> Result<Self> {
        Ok(Self {
            episode: record.get_scalar("episode")? as _,
            step: record.get_scalar("step")? as _,
            reward: record.get_scalar("reward")?,
            backend_steps: record.get_scalar("backend_steps")? as _,
        })
    }
}

#[test]
fn main() -> Result<()> {
    let mut env = Env::build(&env_config("misaligned"), 0)?;
    let mut policy = RandomPolicy;
    let mut recorder = BufferedRecorder::new();

    let rs = util::eval_with_recorder(&mut env, &mut policy, 2, &mut recorder)?;
    assert_eq!(rs, vec![14.0, 14.0]);
    assert_eq!(recorder.len(), 10);

    let dir = TempDir::new("kitchen_eval")?;
    let path = dir.path().join("eval.csv");
    let mut wtr = WriterBuilder::new().from_writer(File::create(&path)?);
    for record in recorder.iter() {
        wtr.serialize(KitchenStepRecord::try_from(record)?)?;
    }
    wtr.flush()?;

    // One header line and one line per recorded step
    let n_lines = std::fs::read_to_string(&path)?.lines().count();
    assert_eq!(n_lines, recorder.len() + 1);

    Ok(())
}

#[test]
fn test_eval_with_null_recorder() -> Result<()> {
    let mut env = Env::build(&env_config("newskill"), 0)?;
    let mut policy = RandomPolicy;

    let rs = util::eval_with_recorder(&mut env, &mut policy, 1, &mut NullRecorder {})?;
    assert_eq!(rs, vec![4.0]);
    Ok(())
}

#[test]
fn test_default_evaluator() -> Result<()> {
    fastrand::seed(42);
    let mut policy = RandomPolicy;
    let r = DefaultEvaluator::<Env>::new(&env_config("misaligned"), 0, 3)?.evaluate(&mut policy)?;

    // Cumulative reward of a scripted misaligned episode
    assert_eq!(r, 14.0);
    Ok(())
}

#[test]
fn test_kitchen_evaluator() -> Result<()> {
    fastrand::seed(42);
    let mut policy = RandomPolicy;
    let r = KitchenEvaluator::<Env>::new(&env_config("misaligned"), 0, 3)?.evaluate(&mut policy)?;

    // Four subtasks are completed in a scripted misaligned episode
    assert_eq!(r, 4.0);
    Ok(())
}
