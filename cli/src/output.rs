//! Plain text rendering of looks, favorites and vibes.

use engine::vibes::VibeCatalog;
use engine::{Category, Look, Product};

pub const SESSION_HELP: &str = "\
Commands:
  generate <vibe> [occasion]   new look for a vibe, e.g. `generate bold night out`
  set <index> <hex>            change one swatch, e.g. `set 2 #F4C2C2`
  reset                        restore the generated palette
  save                         save the current look to favorites
  remove <id>                  delete a favorite
  restore <id>                 make a favorite the current look
  favorites                    list saved looks
  show                         print the current look
  vibes                        list available vibes
  help                         this text
  quit                         leave the session";

pub fn format_vibes() -> String {
    VibeCatalog::all()
        .iter()
        .map(|vibe| format!("{:<12} {:<12} {}", vibe.key, vibe.label, vibe.seed))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_look(look: &Look) -> String {
    let mut lines = Vec::new();

    let occasion = look
        .occasion()
        .map(|o| format!(" for {o}"))
        .unwrap_or_default();
    lines.push(format!("{}{occasion}  [{}]", look.mood(), look.id()));

    lines.push("Palette:".to_string());
    let modified = look.modified_indices();
    for (index, color) in look.palette().iter().enumerate() {
        if modified.contains(&index) {
            lines.push(format!(
                "  {index}  {color}  (was {})",
                look.original_palette()[index]
            ));
        } else {
            lines.push(format!("  {index}  {color}"));
        }
    }

    for category in Category::ALL {
        let products = look.products().get(category);
        if products.is_empty() {
            lines.push(format!("{}: no suggestions", title(category)));
            continue;
        }
        lines.push(format!("{}:", title(category)));
        lines.extend(products.iter().map(format_product));
    }

    lines.join("\n")
}

pub fn format_favorites(looks: &[Look]) -> String {
    if looks.is_empty() {
        return "No favorites saved yet.".to_string();
    }

    looks
        .iter()
        .map(|look| {
            let swatches: Vec<String> = look.palette().iter().map(|c| c.to_string()).collect();
            let occasion = look.occasion().map(|o| o.as_str()).unwrap_or("-");
            let edited = if look.is_modified() { " (edited)" } else { "" };
            format!(
                "{}  {}  {}  {}{edited}",
                look.id(),
                look.mood(),
                occasion,
                swatches.join(" ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_product(product: &Product) -> String {
    match product.product_url.as_deref() {
        Some(url) => format!("  - {}  {url}", product.display_name()),
        None => format!("  - {}", product.display_name()),
    }
}

fn title(category: Category) -> &'static str {
    match category {
        Category::Face => "Face",
        Category::Eyes => "Eyes",
        Category::Lips => "Lips",
    }
}
