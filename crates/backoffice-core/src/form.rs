// Form state for the CRUD editors
//
// Forms hold raw strings the way the editor widgets produce them; the wire
// payload is built in one place per resource (`to_payload`) so the form
// shape and the canonical snake_case schema cannot drift apart. Id-list
// fields are edited as comma-separated strings and parsed back on submit.

use backoffice_contracts::{Category, CategoryPayload, Event, EventPayload, User, UserPayload};

use crate::error::{CoreError, Result};
use crate::validate;

/// Editor state for a category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForm {
    pub name: String,
}

impl CategoryForm {
    pub fn from_category(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
        }
    }

    pub fn to_payload(&self) -> Result<CategoryPayload> {
        validate::require("name", &self.name)?;
        Ok(CategoryPayload {
            name: self.name.trim().to_string(),
        })
    }
}

/// Editor state for an event. Dates and numbers stay as entered until
/// submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventForm {
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub category_id: String,
    /// Plain URL or inline data URL.
    pub image: String,
    pub price: String,
    pub min_capacity: String,
    pub max_capacity: String,
    /// Comma-separated user ids.
    pub user_ids: String,
}

impl EventForm {
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            start_date: event.start_date.to_string(),
            end_date: event.end_date.to_string(),
            location: event.location.clone(),
            category_id: event.category_id.to_string(),
            image: event.image.clone(),
            price: event.price.to_string(),
            min_capacity: event.min_capacity.to_string(),
            max_capacity: event.max_capacity.to_string(),
            user_ids: validate::format_id_list(&event.user_ids),
        }
    }

    pub fn to_payload(&self) -> Result<EventPayload> {
        validate::require("title", &self.title)?;
        validate::require("location", &self.location)?;
        let start_date = validate::parse_date("start date", &self.start_date)?;
        let end_date = validate::parse_date("end date", &self.end_date)?;
        validate::check_date_order(start_date, end_date)?;
        validate::check_image(&self.image)?;

        let category_id = self
            .category_id
            .trim()
            .parse()
            .map_err(|_| CoreError::validation("category is required"))?;
        let price: f64 = self.price.trim().parse().unwrap_or(0.0);
        if price < 0.0 {
            return Err(CoreError::validation("price must not be negative"));
        }
        // 0 means no minimum, same as leaving the field empty
        let min_capacity = match self.min_capacity.trim() {
            "" => 0,
            text => text
                .parse()
                .map_err(|_| CoreError::validation("minimum capacity must be a whole number"))?,
        };
        // max >= min is deliberately NOT enforced here; the backend owns it
        let max_capacity = self.max_capacity.trim().parse().unwrap_or(0);

        Ok(EventPayload {
            title: self.title.trim().to_string(),
            start_date,
            end_date,
            location: self.location.trim().to_string(),
            category_id,
            image: self.image.clone(),
            price,
            min_capacity,
            max_capacity,
            user_ids: validate::parse_id_list(&self.user_ids),
        })
    }
}

/// Editor state for a user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub email: String,
    pub name: String,
    pub password: String,
    pub balance: String,
    /// Comma-separated event ids.
    pub event_ids: String,
}

impl UserForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            name: user.name.clone(),
            password: user.password.clone(),
            balance: user.balance.to_string(),
            event_ids: validate::format_id_list(&user.event_ids),
        }
    }

    pub fn to_payload(&self) -> Result<UserPayload> {
        validate::require_email("email", &self.email)?;
        validate::require("name", &self.name)?;
        Ok(UserPayload {
            email: self.email.trim().to_string(),
            name: self.name.trim().to_string(),
            password: self.password.clone(),
            balance: self.balance.trim().parse().unwrap_or(0.0),
            event_ids: validate::parse_id_list(&self.event_ids),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_form_round_trips_the_id_list() {
        let event = Event {
            event_id: 9,
            title: "Expo".into(),
            start_date: "2030-03-01".parse().unwrap(),
            end_date: "2030-03-03".parse().unwrap(),
            location: "Porto".into(),
            category_id: 2,
            image: String::new(),
            price: 15.0,
            min_capacity: 10,
            max_capacity: 200,
            user_ids: vec![4, 8, 15],
        };
        let form = EventForm::from_event(&event);
        assert_eq!(form.user_ids, "4, 8, 15");
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.user_ids, vec![4, 8, 15]);
    }

    #[test]
    fn event_form_rejects_unordered_dates() {
        let form = EventForm {
            title: "Expo".into(),
            start_date: "2030-03-05".into(),
            end_date: "2030-03-01".into(),
            location: "Porto".into(),
            category_id: "1".into(),
            ..EventForm::default()
        };
        assert!(form.to_payload().is_err());
    }

    #[test]
    fn event_form_rejects_negative_price() {
        let form = EventForm {
            title: "Expo".into(),
            start_date: "2030-03-01".into(),
            end_date: "2030-03-02".into(),
            location: "Porto".into(),
            category_id: "1".into(),
            price: "-5".into(),
            ..EventForm::default()
        };
        assert!(form.to_payload().is_err());
    }

    #[test]
    fn event_form_accepts_a_zero_minimum_capacity() {
        // "0" is what the editor shows for events stored without a minimum;
        // submitting it unchanged must not be a validation error.
        let form = EventForm {
            title: "Expo".into(),
            start_date: "2030-03-01".into(),
            end_date: "2030-03-02".into(),
            location: "Porto".into(),
            category_id: "1".into(),
            min_capacity: "0".into(),
            ..EventForm::default()
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.min_capacity, 0);
    }

    #[test]
    fn event_form_rejects_a_non_numeric_minimum_capacity() {
        let form = EventForm {
            title: "Expo".into(),
            start_date: "2030-03-01".into(),
            end_date: "2030-03-02".into(),
            location: "Porto".into(),
            category_id: "1".into(),
            min_capacity: "lots".into(),
            ..EventForm::default()
        };
        assert!(form.to_payload().is_err());
    }

    #[test]
    fn user_form_requires_a_valid_email() {
        let form = UserForm {
            email: "not-an-email".into(),
            name: "Someone".into(),
            ..UserForm::default()
        };
        assert!(form.to_payload().is_err());
    }

    #[test]
    fn category_form_requires_a_name() {
        assert!(CategoryForm { name: " ".into() }.to_payload().is_err());
        let payload = CategoryForm { name: " Web ".into() }.to_payload().unwrap();
        assert_eq!(payload.name, "Web");
    }
}
