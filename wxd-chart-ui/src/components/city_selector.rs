//! Dropdown selector for choosing a city.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CitySelectorProps {
    /// Drive the comparison city instead of the primary one
    #[props(default = false)]
    pub secondary: bool,
}

/// City dropdown selector.
///
/// Changing the primary city always refreshes; changing the secondary city
/// refreshes only while comparison is on.
#[component]
pub fn CitySelector(props: CitySelectorProps) -> Element {
    let mut state = use_context::<AppState>();
    let cities = state.cities.read().clone();
    let secondary = props.secondary;
    let selected = if secondary {
        (state.city2)()
    } else {
        (state.city)()
    };
    let (id, label) = if secondary {
        ("city2-select", "Compare with: ")
    } else {
        ("city-select", "City: ")
    };

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        if secondary {
            state.city2.set(value);
            if (state.compare)() {
                state.request_refresh();
            }
        } else {
            state.city.set(value);
            state.request_refresh();
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "{id}",
                style: "font-weight: bold; margin-right: 8px;",
                "{label}"
            }
            select {
                id: "{id}",
                onchange: on_change,
                for city in cities.iter() {
                    option {
                        value: "{city}",
                        selected: *city == selected,
                        "{city}"
                    }
                }
            }
        }
    }
}
