use log::debug;
use scraper::{ElementRef, Html, Selector};

pub const ITEM_ID_ATTR: &str = "data-id";

/// Id carried by the clicked element itself.
///
/// Children of a tagged item (its image or title) do not inherit the id.
fn clicked_item_id<'a>(target: ElementRef<'a>) -> Option<&'a str> {
    target
        .value()
        .attr(ITEM_ID_ATTR)
        .filter(|id| !id.is_empty())
}

/// Single listener on the result list container.
///
/// Resolves the first element of the rendered list matching `target_selector` as the
/// click target and returns its item id, if it carries one.
pub fn selected_item_id(list_html: &str, target_selector: &str) -> Option<String> {
    let selector = match Selector::parse(target_selector) {
        Ok(selector) => selector,
        Err(e) => {
            debug!("Ignoring click on invalid selector {:?}: {:?}", target_selector, e);
            return None;
        }
    };

    let container = Html::parse_fragment(&format!("<ul data-meal-list=''>{list_html}</ul>"));
    let target = container.select(&selector).next()?;
    clicked_item_id(target).map(str::to_string)
}
