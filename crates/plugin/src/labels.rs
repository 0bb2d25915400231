/// Client-record fields selectable as payload values, with their display
/// labels. Mirrors the options offered by the plugin configuration screen.
pub const FIELD_OPTIONS: &[(&str, &str)] = &[
    ("ip_address", "IP Address"),
    ("clientid", "Client ID"),
    ("first", "First Name"),
    ("last", "Last Name"),
    ("company", "Company"),
    ("email", "Email"),
    ("login", "Login Name"),
    ("address", "Address"),
    ("city", "City"),
    ("state", "State"),
    ("zip", "Zip Code"),
    ("country", "Country/Territory"),
    ("phone", "Phone"),
];

/// Display label for a selectable field, if it is one of the known options.
#[must_use]
pub fn label_for(field: &str) -> Option<&'static str> {
    FIELD_OPTIONS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, label)| *label)
}
