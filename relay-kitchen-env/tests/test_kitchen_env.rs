use relay_core::{record::Record, Env as _, Step};
use relay_kitchen_env::{
    util::test::{env_config, Env},
    KitchenAct, KitchenTask, ACT_DIM, MAX_EPISODE_STEPS, N_SUBTASKS, OBS_DIM, STATE_DIM,
};
use test_log::test;

/// Steps with a zero action until the episode ends, returning the terminal
/// step, its record and the number of steps taken.
fn run_until_done(env: &mut Env, limit: usize) -> (Step<Env>, Record, usize) {
    let act = KitchenAct::zero();
    for t in 1..=limit {
        let (step, record) = env.step(&act);
        if step.is_done() {
            return (step, record, t);
        }
    }
    panic!("no episode end within {} steps", limit);
}

#[test]
fn test_build_selects_task() {
    let env = Env::build(&env_config("misaligned"), 0).unwrap();
    assert_eq!(env.id(), "kitchen");
    assert_eq!(env.task(), KitchenTask::Misaligned);
    assert_eq!(env.env_id(), "kitchen-mlsh-v0");
    assert_eq!(env.max_episode_steps(), MAX_EPISODE_STEPS);
    assert_eq!(env.observation_space().shape(), &[OBS_DIM]);
    assert_eq!(env.action_space().shape(), &[ACT_DIM]);

    let env = Env::build(&env_config("newskill"), 0).unwrap();
    assert_eq!(env.task(), KitchenTask::NewSkill);
    assert_eq!(env.env_id(), "kitchen-newskill-v0");

    // Unrecognized task names fall back to the mixed task
    let env = Env::build(&env_config("no-such-task"), 0).unwrap();
    assert_eq!(env.task(), KitchenTask::Mixed);
    assert_eq!(env.env_id(), "kitchen-mixed-v0");
}

#[test]
fn test_rewards_are_widened_to_f64() {
    let mut env = Env::build(&env_config("mixed"), 0).unwrap();
    let _ = env.reset(None).unwrap();
    let act = KitchenAct::zero();

    let (step, _) = env.step(&act);
    let reward: f64 = step.reward[0];
    assert_eq!(reward, 0.0);

    // The microwave is completed at the second step of the script
    let (step, _) = env.step(&act);
    assert_eq!(step.reward, vec![1.0f64]);
}

#[test]
fn test_misaligned_episode_terminates() {
    let mut env = Env::build(&env_config("misaligned"), 0).unwrap();
    let _ = env.reset(None).unwrap();

    let (step, record, t) = run_until_done(&mut env, MAX_EPISODE_STEPS);
    assert_eq!(t, 5);
    assert_eq!(step.is_terminated, vec![1]);
    assert_eq!(step.is_truncated, vec![0]);
    assert_eq!(step.reward, vec![4.0f64]);
    assert_eq!(step.obs.obs[[0]], 5.0);

    // The episode summary is merged into the terminal record
    assert_eq!(record.get_scalar("episode_length").unwrap(), 5.0);
    assert_eq!(record.get_scalar("episode_return").unwrap(), 14.0);
    assert_eq!(record.get_scalar("score").unwrap(), 4.0);
    assert_eq!(record.get_scalar("microwave").unwrap(), 1.0);
    assert_eq!(record.get_scalar("light switch").unwrap(), 1.0);
    assert_eq!(record.get_scalar("slide cabinet").unwrap(), 1.0);
    assert_eq!(record.get_scalar("hinge cabinet").unwrap(), 1.0);
    assert_eq!(record.get_scalar("kettle").unwrap(), 0.0);
    assert_eq!(record.get_scalar("left hinge cabinet").unwrap(), 0.0);
    assert_eq!(record.keys().count(), N_SUBTASKS + 4);

    // The summary stays available until the next reset
    let info = env.episode_info();
    assert_eq!(info.get_scalar("episode_length").unwrap(), 5.0);
    assert_eq!(info.get_scalar("episode_return").unwrap(), 14.0);
}

#[test]
fn test_newskill_episode_is_truncated_by_backend() {
    let mut env = Env::build(&env_config("newskill"), 0).unwrap();
    let _ = env.reset(None).unwrap();

    let (step, record, t) = run_until_done(&mut env, MAX_EPISODE_STEPS);
    assert_eq!(t, 6);
    assert_eq!(step.is_terminated, vec![0]);
    assert_eq!(step.is_truncated, vec![1]);
    assert_eq!(record.get_scalar("left hinge cabinet").unwrap(), 1.0);
    assert_eq!(record.get_scalar("score").unwrap(), 1.0);
    assert_eq!(record.get_scalar("episode_return").unwrap(), 4.0);
}

#[test]
fn test_episode_is_truncated_at_max_episode_steps() {
    // The mixed script never ends an episode on its own
    let config = env_config("mixed").max_episode_steps(10);
    let mut env = Env::build(&config, 0).unwrap();
    let _ = env.reset(None).unwrap();

    let (step, record, t) = run_until_done(&mut env, 100);
    assert_eq!(t, 10);
    assert_eq!(step.is_terminated, vec![0]);
    assert_eq!(step.is_truncated, vec![1]);
    assert_eq!(record.get_scalar("episode_length").unwrap(), 10.0);
    assert_eq!(record.get_scalar("episode_return").unwrap(), 24.0);

    // The default limit matches the kitchen benchmark
    let mut env = Env::build(&env_config("mixed"), 0).unwrap();
    let _ = env.reset(None).unwrap();
    let (_, _, t) = run_until_done(&mut env, MAX_EPISODE_STEPS + 1);
    assert_eq!(t, MAX_EPISODE_STEPS);
}

#[test]
fn test_completion_flags_accumulate_within_episode() {
    let mut env = Env::build(&env_config("mixed"), 0).unwrap();
    let _ = env.reset(None).unwrap();
    let act = KitchenAct::zero();

    let _ = env.step(&act);
    assert_eq!(env.episode_info().get_scalar("microwave").unwrap(), 0.0);

    let _ = env.step(&act);
    assert_eq!(env.episode_info().get_scalar("microwave").unwrap(), 1.0);

    // The flag stays set at steps that do not report the subtask again
    let _ = env.step(&act);
    assert_eq!(env.episode_info().get_scalar("microwave").unwrap(), 1.0);
    assert_eq!(env.episode_info().get_scalar("kettle").unwrap(), 0.0);
}

#[test]
fn test_reset_clears_episode_state() {
    let mut env = Env::build(&env_config("mixed"), 0).unwrap();
    let _ = env.reset(None).unwrap();
    let act = KitchenAct::zero();
    for _ in 0..4 {
        let _ = env.step(&act);
    }
    assert_eq!(env.episode_info().get_scalar("episode_length").unwrap(), 4.0);
    assert_eq!(env.episode_info().get_scalar("microwave").unwrap(), 1.0);

    let obs = env.reset(None).unwrap();
    assert_eq!(obs.obs[[0]], 0.0);

    let info = env.episode_info();
    assert_eq!(info.get_scalar("episode_length").unwrap(), 0.0);
    assert_eq!(info.get_scalar("episode_return").unwrap(), 0.0);
    assert_eq!(info.get_scalar("microwave").unwrap(), 0.0);
    assert_eq!(info.get_scalar("score").unwrap(), 0.0);
}

#[test]
fn test_reset_is_skipped_unless_done() {
    let mut env = Env::build(&env_config("mixed"), 0).unwrap();
    let _ = env.reset(None).unwrap();
    let act = KitchenAct::zero();
    let _ = env.step(&act);
    let _ = env.step(&act);

    // is_done[0] == 0 requests no reset and yields a dummy observation
    let obs = env.reset(Some(&vec![0])).unwrap();
    assert_eq!(obs.obs.shape(), &[1, OBS_DIM]);

    let (_, record) = env.step(&act);
    assert_eq!(record.get_scalar("backend_steps").unwrap(), 3.0);
    assert_eq!(env.episode_info().get_scalar("episode_length").unwrap(), 3.0);

    // is_done[0] == 1 resets
    let obs = env.reset(Some(&vec![1])).unwrap();
    assert_eq!(obs.obs.shape(), &[OBS_DIM]);
    assert_eq!(env.episode_info().get_scalar("episode_length").unwrap(), 0.0);
}

#[test]
fn test_seeds_reach_the_backend() {
    let mut env = Env::build(&env_config("mixed"), 7).unwrap();

    // The build seed is used at the first reset; the scripted backend
    // writes the seed into the goal part of its observations
    let obs = env.reset(None).unwrap();
    assert_eq!(obs.obs[[0]], 0.0);
    assert_eq!(obs.obs[[STATE_DIM]], 7.0);

    // Indexed resets reseed the backend
    let obs = env.reset_with_index(3).unwrap();
    assert_eq!(obs.obs[[STATE_DIM]], 3.0);

    // A plain reset does not
    let obs = env.reset(None).unwrap();
    assert_eq!(obs.obs[[STATE_DIM]], 3.0);
}

#[test]
fn test_step_with_reset_attaches_initial_observation() {
    let mut env = Env::build(&env_config("misaligned"), 0).unwrap();
    let _ = env.reset(None).unwrap();
    let act = KitchenAct::zero();

    for _ in 0..4 {
        let (step, _) = env.step_with_reset(&act);
        assert!(!step.is_done());
        assert!(step.init_obs.is_none());
    }

    let (step, record) = env.step_with_reset(&act);
    assert!(step.is_done());
    assert_eq!(step.obs.obs[[0]], 5.0);

    // The next episode has already started
    let init_obs = step.init_obs.unwrap();
    assert_eq!(init_obs.obs[[0]], 0.0);
    assert_eq!(env.episode_info().get_scalar("episode_length").unwrap(), 0.0);

    // The terminal record still carries the episode summary
    assert_eq!(record.get_scalar("episode_length").unwrap(), 5.0);
}
