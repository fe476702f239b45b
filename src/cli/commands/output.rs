//! Console rendering of characters and pages

use colored::*;

use swapi_browser::characters::{Character, CharacterDetails, PageState};

pub fn print_character(character: &Character) {
    println!("{} {}", character.name.yellow().bold(), format!("#{}", character.id).dimmed());
    print_attribute("Height", &format!("{}cm", character.height));
    print_attribute("Mass", &format!("{}kg", character.mass));
    print_attribute("Hair Color", &character.hair_color);
    print_attribute("Skin Color", &character.skin_color);
    print_attribute("Eye Color", &character.eye_color);
    print_attribute("Birth Year", &character.birth_year);
    print_attribute("Gender", &character.gender);

    match &character.portrait_url {
        Some(url) => print_attribute("Portrait", &url.blue().underline().to_string()),
        None => print_attribute("Portrait", &"none".dimmed().to_string()),
    }
}

pub fn print_details(details: &CharacterDetails) {
    print_list("Films", &details.films, "No films found.");
    print_list("Vehicles", &details.vehicles, "No vehicles found.");
    print_list("Starships", &details.starships, "No starships found.");
}

pub fn print_page(page: &PageState) {
    for record in &page.characters {
        println!("  • {}", record.name);
    }
    println!();
    match &page.previous {
        Some(url) => println!("{} {}", "Previous:".bold(), url.cyan()),
        None => println!("{} {}", "Previous:".bold(), "none".dimmed()),
    }
    match &page.next {
        Some(url) => println!("{} {}", "Next:".bold(), url.cyan()),
        None => println!("{} {}", "Next:".bold(), "none".dimmed()),
    }
}

pub fn print_error(message: &str) {
    eprintln!("{}", message.red());
}

fn print_attribute(label: &str, value: &str) {
    println!("  {:<12} {}", format!("{}:", label).bold(), value);
}

fn print_list(label: &str, names: &[String], empty: &str) {
    if names.is_empty() {
        print_attribute(label, &empty.dimmed().to_string());
    } else {
        print_attribute(label, &names.join(", "));
    }
}
