//! A tiny option table driven by `set` / `add` commands.
//!
//! Run with: `cargo run --example option_table`

use option_codec::{DynOption, TimestampedList};
use std::collections::BTreeMap;

fn main() {
    let mut options: BTreeMap<&str, Box<dyn DynOption>> = BTreeMap::new();
    options.insert("tabstop", Box::new(8i32));
    options.insert("autowrap", Box::new(false));
    options.insert("extra_word_chars", Box::new(vec!["_".to_string()]));
    options.insert("scrolloff", Box::new((0i32, 3i32)));
    options.insert("ranges", Box::new(TimestampedList::<String>::new(0, vec![])));

    let commands = [
        ("set", "tabstop", "4"),
        ("add", "tabstop", "2"),
        ("set", "autowrap", "yes"),
        ("add", "autowrap", "no"),
        ("add", "extra_word_chars", "-:\\:"),
        ("set", "scrolloff", "1|2|3"),
        ("set", "ranges", "5:1.1,1.8"),
        ("add", "ranges", "2.1,2.3"),
    ];

    for (command, name, value) in commands {
        let Some(option) = options.get_mut(name) else {
            continue;
        };
        let result = match command {
            "set" => option.set_from_str(value).map(|()| true),
            _ => option.add_from_str(value),
        };
        match result {
            Ok(changed) => println!("{command} {name} {value:?}: ok (changed: {changed})"),
            Err(err) => println!("{command} {name} {value:?}: error: {err}"),
        }
    }

    println!();
    for (name, option) in &options {
        println!(
            "{name} ({}) = {}",
            option.type_name(),
            option.to_option_string()
        );
    }
}
