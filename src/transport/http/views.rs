//! Server-rendered HTML pages.

use crate::app::view_models::{EditReviewViewModel, RestaurantReviewsViewModel};
use crate::domain::model::{Restaurant, MAX_RATING, MIN_RATING};
use crate::transport::http::csrf::CSRF_FIELD;

/// Escapes text for use in element content and quoted attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn opt(value: &Option<String>) -> String {
    value.as_deref().map(escape).unwrap_or_default()
}

fn layout(title: &str, content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{} - OdeToFood</title>\n</head>\n<body>\n\
         <nav><a href=\"/Home/Index\">OdeToFood</a> | <a href=\"/Home/Privacy\">Privacy</a></nav>\n\
         <main>\n{}\n</main>\n</body>\n</html>\n",
        escape(title),
        content
    )
}

pub fn index(restaurants: &[Restaurant]) -> String {
    let mut content = String::from("<h1>Restaurants</h1>\n");
    if restaurants.is_empty() {
        content.push_str("<p>No restaurants yet.</p>\n");
    } else {
        content.push_str(
            "<table>\n<thead><tr><th>Name</th><th>City</th><th>Country</th><th></th></tr></thead>\n<tbody>\n",
        );
        for r in restaurants {
            content.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td><a href=\"/Home/Details/{}\">Details</a></td></tr>\n",
                escape(&r.name),
                opt(&r.city),
                opt(&r.country),
                r.id
            ));
        }
        content.push_str("</tbody>\n</table>\n");
    }
    layout("Restaurants", &content)
}

pub fn details(model: &RestaurantReviewsViewModel) -> String {
    let r = &model.restaurant;
    let mut content = format!(
        "<h1>{}</h1>\n<p>{} {}</p>\n<h2>Reviews</h2>\n",
        escape(&r.name),
        opt(&r.city),
        opt(&r.country)
    );
    if model.reviews.is_empty() {
        content.push_str("<p>No reviews yet.</p>\n");
    } else {
        content.push_str("<ul class=\"reviews\">\n");
        for review in &model.reviews {
            content.push_str(&format!(
                "<li><strong>{}/{}</strong> by {}<p>{}</p></li>\n",
                review.rating,
                MAX_RATING,
                escape(&review.reviewer_name),
                opt(&review.body)
            ));
        }
        content.push_str("</ul>\n");
    }
    content.push_str(&format!(
        "<p><a href=\"/Home/AddReview/{}\">Add review</a> | <a href=\"/Home/Index\">Back to list</a></p>\n",
        r.id
    ));
    layout(&r.name, &content)
}

/// The add-review form. `errors` are listed above the form when re-rendering.
pub fn add_review_form(model: &EditReviewViewModel, token: &str, errors: &[String]) -> String {
    let mut content = String::from("<h1>Add review</h1>\n");
    if !errors.is_empty() {
        content.push_str("<ul class=\"validation-errors\">\n");
        for e in errors {
            content.push_str(&format!("<li>{}</li>\n", escape(e)));
        }
        content.push_str("</ul>\n");
    }
    let rating = if model.rating == 0 {
        String::new()
    } else {
        model.rating.to_string()
    };
    content.push_str(&format!(
        "<form method=\"post\" action=\"/Home/AddReview/{id}\">\n\
         <input type=\"hidden\" name=\"{field}\" value=\"{token}\">\n\
         <input type=\"hidden\" name=\"restaurantId\" value=\"{id}\">\n\
         <label>Rating <input type=\"number\" name=\"rating\" min=\"{min}\" max=\"{max}\" value=\"{rating}\"></label>\n\
         <label>Your name <input type=\"text\" name=\"reviewerName\" value=\"{name}\"></label>\n\
         <label>Review <textarea name=\"body\">{body}</textarea></label>\n\
         <button type=\"submit\">Save</button>\n\
         </form>\n\
         <p><a href=\"/Home/Details/{id}\">Back to restaurant</a></p>\n",
        id = model.restaurant_id,
        field = CSRF_FIELD,
        token = escape(token),
        min = MIN_RATING,
        max = MAX_RATING,
        rating = rating,
        name = escape(&model.reviewer_name),
        body = opt(&model.body),
    ));
    layout("Add review", &content)
}

pub fn not_found(message: &str) -> String {
    layout(
        "Not found",
        &format!(
            "<h1>Not found</h1>\n<p>{}</p>\n<p><a href=\"/Home/Index\">Back to list</a></p>",
            escape(message)
        ),
    )
}

pub fn bad_request(message: &str) -> String {
    layout(
        "Bad request",
        &format!("<h1>Bad request</h1>\n<p>{}</p>", escape(message)),
    )
}

pub fn privacy() -> String {
    layout(
        "Privacy Policy",
        "<h1>Privacy Policy</h1>\n<p>Reviews are stored with the name you enter. Nothing else is collected.</p>",
    )
}
