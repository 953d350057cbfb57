//! `keys` command.

use owo_colors::OwoColorize;
use project_settings::SettingKey;

pub fn run(mapped_only: bool) {
    let mut group = None;
    for key in SettingKey::ALL {
        let external = key.external_key();
        if mapped_only && external.is_none() {
            continue;
        }
        if group != Some(key.group()) {
            group = Some(key.group());
            println!();
            println!("{}", key.group().bold());
        }
        println!(
            "  {:<30} {:<36} {:<5} {}",
            key.name(),
            external.unwrap_or("-"),
            key.kind().unit().unwrap_or(""),
            key.kind().describe().dimmed()
        );
    }
}
