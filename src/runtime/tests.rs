use super::dispatch::dispatch;
use super::event_loop::{Flow, step};
use crate::audio::{PlayMode, PlayerState};
use crate::config::Settings;
use crate::input::{Action, InputEvent};
use crate::power::BatteryStatus;
use crate::testing::{EngineCall, FixedBattery, ScriptedInput, controller};

#[test]
fn transport_buttons_reach_the_controller() {
    let settings = Settings::default();
    let mut battery = FixedBattery(BatteryStatus::Full);
    let mut c = controller(&["A.mp3", "B.wav", "C.mp3"]);
    c.begin().unwrap();

    dispatch(Action::Next, &mut c, &mut battery, &settings.audio);
    assert_eq!(c.current_index(), Some(1));
    dispatch(Action::Prev, &mut c, &mut battery, &settings.audio);
    dispatch(Action::Prev, &mut c, &mut battery, &settings.audio);
    assert_eq!(c.current_index(), Some(2));

    dispatch(Action::Play, &mut c, &mut battery, &settings.audio);
    assert_eq!(c.engine().calls.last(), Some(&EngineCall::PauseResume));
}

#[test]
fn volume_buttons_step_by_configured_amount() {
    let mut settings = Settings::default();
    settings.audio.volume_step = 2;
    let mut battery = FixedBattery(BatteryStatus::Full);
    let mut c = controller(&["A.mp3"]);
    c.begin().unwrap();

    dispatch(Action::VolUp, &mut c, &mut battery, &settings.audio);
    assert_eq!(c.volume(), 17);
    dispatch(Action::VolDown, &mut c, &mut battery, &settings.audio);
    dispatch(Action::VolDown, &mut c, &mut battery, &settings.audio);
    assert_eq!(c.volume(), 13);
}

#[test]
fn hack_click_announces_battery_status() {
    let settings = Settings::default();
    let mut battery = FixedBattery(BatteryStatus::Low);
    let mut c = controller(&["A.mp3"]);
    c.begin().unwrap();

    dispatch(Action::HackClick, &mut c, &mut battery, &settings.audio);
    assert_eq!(c.state(), PlayerState::PlayingSystemSound);
    assert_eq!(c.engine().last_started(), Some("/system/bv03.wav"));
}

#[test]
fn hack_long_toggles_play_mode() {
    let settings = Settings::default();
    let mut battery = FixedBattery(BatteryStatus::Full);
    let mut c = controller(&["A.mp3", "B.wav"]);
    c.begin().unwrap();

    dispatch(Action::HackLong, &mut c, &mut battery, &settings.audio);
    assert_eq!(c.get_play_mode(), PlayMode::Random);
    dispatch(Action::HackLong, &mut c, &mut battery, &settings.audio);
    assert_eq!(c.get_play_mode(), PlayMode::LoopAll);
}

#[test]
fn step_handles_end_of_stream_before_input() {
    let settings = Settings::default();
    let mut battery = FixedBattery(BatteryStatus::Full);
    let mut input = ScriptedInput::from_names(&["NEXT"]);
    let mut c = controller(&["A.mp3", "B.wav", "C.mp3"]);
    c.begin().unwrap();

    c.engine_mut().finish_stream();
    assert_eq!(
        step(&mut c, &mut input, &mut battery, &settings).unwrap(),
        Flow::Continue
    );
    // End-of-stream moved to B, then NEXT moved to C.
    assert_eq!(c.current_index(), Some(2));
    assert_eq!(
        c.engine().started(),
        vec!["/music/A.mp3", "/music/B.wav", "/music/C.mp3"]
    );

    assert_eq!(
        step(&mut c, &mut input, &mut battery, &settings).unwrap(),
        Flow::Quit
    );
}

#[test]
fn prompt_end_of_stream_does_not_advance() {
    let settings = Settings::default();
    let mut battery = FixedBattery(BatteryStatus::Critical);
    let mut input = ScriptedInput::from_names(&["NEXT", "HACK_CLICK"]);
    let mut c = controller(&["A.mp3", "B.wav", "C.mp3"]);
    c.begin().unwrap();

    super::event_loop::run(&mut c, &mut input, &mut battery, &settings).unwrap();
    assert_eq!(c.engine().last_started(), Some("/system/bv04.wav"));
    assert_eq!(c.current_index(), Some(1));

    c.engine_mut().finish_stream();
    c.tick();
    assert_eq!(c.state(), PlayerState::Idle);
    assert_eq!(c.current_index(), Some(1));
    assert_eq!(c.engine().last_started(), Some("/system/bv04.wav"));
}

#[test]
fn log_lines_end_with_carriage_return() {
    use std::io::Write;

    let mut out = super::startup::CrlfWriter(Vec::new());
    write!(out, "first\nsecond\n").unwrap();
    out.write_all(b"tail").unwrap();
    assert_eq!(out.0, b"first\r\nsecond\r\ntail");
}

#[test]
fn rescan_key_recovers_an_idle_player() {
    let settings = Settings::default();
    let mut battery = FixedBattery(BatteryStatus::Full);
    let mut input = ScriptedInput::from_events(&[InputEvent::Rescan]);
    let mut c = controller(&[]);
    c.begin().unwrap();
    assert_eq!(c.state(), PlayerState::Idle);

    c.storage_mut().set_music(&["A.mp3"]);
    assert_eq!(
        step(&mut c, &mut input, &mut battery, &settings).unwrap(),
        Flow::Continue
    );
    assert_eq!(c.state(), PlayerState::PlayingMusic);
    assert_eq!(c.engine().last_started(), Some("/music/A.mp3"));
}
