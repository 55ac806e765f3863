//! HTML fragments for the result list, the detail view and the whole page.
use crate::app::UiState;
use crate::model::{MealDetail, MealSummary};
use crate::notify::Notification;
use html_escape::{encode_single_quoted_attribute as attr, encode_text as text};

pub const PAGE_TITLE: &str = "Meal Finder";
pub const SEARCH_PLACEHOLDER: &str = "Search for meals or keywords";

/// Heading shown above the result list, echoing the query back.
pub fn render_heading(query: &str) -> String {
    format!(
        "<h4 class='title'>Search results for <span>'{}'</span>:</h4>",
        text(query)
    )
}

/// One `<li>` per meal, each tagged with `data-id` for click delegation.
pub fn render_list(meals: &[MealSummary]) -> String {
    meals
        .iter()
        .map(|meal| {
            format!(
                "<li data-id='{}'><img src='{}' alt='{}' /><h6>{}</h6></li>",
                attr(&meal.id),
                attr(&meal.thumbnail_url),
                attr(&meal.name),
                text(&meal.name)
            )
        })
        .collect()
}

/// Detail view for a single recipe.
///
/// Category and area lines are left out entirely when the field is absent.
pub fn render_detail(detail: &MealDetail) -> String {
    let mut info = String::new();
    if let Some(category) = &detail.category {
        info.push_str(&format!("<p><span>Category:</span> {}</p>", text(category)));
    }
    if let Some(area) = &detail.area {
        info.push_str(&format!("<p><span>Area:</span> {}</p>", text(area)));
    }

    let ingredients: String = detail
        .ingredients
        .iter()
        .map(|ingredient| format!("<li>{}</li>", text(&ingredient.to_string())))
        .collect();

    format!(
        "<h2>{name}</h2>\
         <img src='{thumb}' alt='{alt}' />\
         <div class='info'>{info}</div>\
         <div class='main'>\
         <p>{instructions}</p>\
         <h3>Ingredients:</h3>\
         <ul>{ingredients}</ul>\
         </div>",
        name = text(&detail.name),
        thumb = attr(&detail.thumbnail_url),
        alt = attr(&detail.name),
        info = info,
        instructions = text(&detail.instructions),
        ingredients = ingredients,
    )
}

pub fn render_notification(notification: &Notification) -> String {
    format!(
        "<div class='notification notification--{}'>{}</div>",
        notification.kind,
        text(&notification.message)
    )
}

/// The full application page for the given state.
pub fn render_page(state: &UiState) -> String {
    let main_class = if state.panel_visible() {
        "main"
    } else {
        "main hide"
    };
    let notification = state
        .notification()
        .map(render_notification)
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n\
         <html lang='en'>\n\
         <head><meta charset='utf-8' /><title>{title}</title></head>\n\
         <body>\n\
         <div id='app'>\
         <div class='app-container'>\
         {notification}\
         <div class='meal-finder'>\
         <h2 class='title'>{title}</h2>\
         <div class='header'>\
         <form data-form=''>\
         <label><input type='text' name='search' placeholder='{placeholder}' value='{input}' /></label>\
         <button type='submit'>{label}</button>\
         </form>\
         <button class='button' data-random=''>Random</button>\
         </div>\
         <div class='{main_class}'>\
         <div class='heading' data-meal-heading=''>{heading}</div>\
         <ul class='list' data-meal-list=''>{list}</ul>\
         <div class='single' data-meal-single=''>{detail}</div>\
         </div>\
         </div>\
         </div>\
         </div>\n\
         </body>\n\
         </html>\n",
        title = PAGE_TITLE,
        notification = notification,
        placeholder = SEARCH_PLACEHOLDER,
        input = attr(state.search_input()),
        label = state.submit_label(),
        main_class = main_class,
        heading = state.heading_html(),
        list = state.list_html(),
        detail = state.detail_html(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Ingredient;

    fn detail() -> MealDetail {
        MealDetail {
            id: "52".to_string(),
            name: "Chicken Enchilada".to_string(),
            thumbnail_url: "url1".to_string(),
            category: Some("Chicken".to_string()),
            area: None,
            instructions: "Bake until golden.".to_string(),
            ingredients: vec![Ingredient {
                name: "Salt".to_string(),
                measure: "1 tsp".to_string(),
            }],
        }
    }

    #[test]
    fn test_detail_contains_present_fields_only() {
        let html = render_detail(&detail());
        assert!(html.contains("<h2>Chicken Enchilada</h2>"));
        assert!(html.contains("<p><span>Category:</span> Chicken</p>"));
        assert!(!html.contains("Area:"));
        assert!(html.contains("<ul><li>Salt - 1 tsp</li></ul>"));
        assert!(html.contains("<p>Bake until golden.</p>"));
    }

    #[test]
    fn test_detail_is_deterministic() {
        assert_eq!(render_detail(&detail()), render_detail(&detail()));
    }

    #[test]
    fn test_heading_escapes_query() {
        assert_eq!(
            render_heading("<b>"),
            "<h4 class='title'>Search results for <span>'&lt;b&gt;'</span>:</h4>"
        );
    }

    #[test]
    fn test_list_item_markup() {
        let html = render_list(&[MealSummary {
            id: "52".to_string(),
            name: "Tom's Pie".to_string(),
            thumbnail_url: "url1".to_string(),
        }]);
        assert!(html.starts_with("<li data-id='52'><img src='url1' alt='Tom"));
        assert!(!html.contains("alt='Tom's"));
        assert!(html.ends_with("<h6>Tom's Pie</h6></li>"));
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        assert_eq!(render_list(&[]), "");
    }

    #[test]
    fn test_page_hides_panel_initially() {
        let html = render_page(&UiState::new());
        assert!(html.contains("<div class='main hide'>"));
        assert!(html.contains("<button type='submit'>Submit</button>"));
        assert!(html.contains(SEARCH_PLACEHOLDER));
        assert!(!html.contains("notification--"));
    }
}
