use anyhow::{anyhow, bail, Result};
use brightsteps_core::{App, FileSnapshotStore, SettingChange};

pub fn show(app: &App<FileSnapshotStore>) {
    let settings = &app.state().settings;
    let screen_time = &settings.screen_time;

    println!("Screen time:");
    println!("  screen-time     {}", on_off(screen_time.enabled));
    println!("  max-minutes     {}", screen_time.max_minutes_per_day);
    match (&screen_time.allowed_start_time, &screen_time.allowed_end_time) {
        (Some(start), Some(end)) => println!("  window          {}-{}", start, end),
        _ => println!("  window          none"),
    }
    println!("Other:");
    println!("  sound           {}", on_off(settings.sound_enabled));
    println!("  vibration       {}", on_off(settings.vibration_enabled));
    println!("  notifications   {}", on_off(settings.progress_notifications));
    println!("  weekly-report   {}", on_off(settings.weekly_report));
}

pub fn set(app: &mut App<FileSnapshotStore>, name: &str, value: &str) -> Result<()> {
    let change = parse_change(name, value)?;
    app.update_setting(change)?;
    println!("Updated {}", name);
    show(app);
    Ok(())
}

fn parse_change(name: &str, value: &str) -> Result<SettingChange> {
    let change = match name {
        "screen-time" => SettingChange::ScreenTimeEnabled(parse_bool(value)?),
        "max-minutes" => SettingChange::MaxMinutesPerDay(
            value.parse().map_err(|_| anyhow!("max-minutes expects a number, got '{}'", value))?,
        ),
        "window" if value == "none" => SettingChange::AllowedWindow(None),
        "window" => {
            let (start, end) = value
                .split_once('-')
                .ok_or_else(|| anyhow!("window expects HH:MM-HH:MM or 'none'"))?;
            SettingChange::AllowedWindow(Some((start.to_string(), end.to_string())))
        }
        "sound" => SettingChange::SoundEnabled(parse_bool(value)?),
        "vibration" => SettingChange::VibrationEnabled(parse_bool(value)?),
        "notifications" => SettingChange::ProgressNotifications(parse_bool(value)?),
        "weekly-report" => SettingChange::WeeklyReport(parse_bool(value)?),
        other => bail!("Unknown setting '{}'", other),
    };
    Ok(change)
}

fn parse_bool(value: &str) -> Result<bool> {
    match value {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        other => bail!("Expected on/off, got '{}'", other),
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}
