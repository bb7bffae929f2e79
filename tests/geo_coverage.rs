//! Integration tests for map registry coverage.

use popdash::core::geo_registry::lookup;
use popdash::core::loader::{load_table, read_table};
use popdash::core::selection::Selection;
use popdash::core::view::{DashboardView, LineAxis};
use popdash::util::constants::DEFAULT_DATA_PATH;
use std::path::PathBuf;

/// Country names as spelled in the world population table the app is
/// built around.
const DATASET_COUNTRIES: &[&str] = &[
    "India", "China", "United States", "Indonesia", "Pakistan", "Nigeria", "Brazil",
    "Bangladesh", "Russia", "Mexico", "Ethiopia", "Japan", "Philippines", "Egypt",
    "DR Congo", "Vietnam", "Iran", "Turkey", "Germany", "Thailand", "United Kingdom",
    "Tanzania", "France", "South Africa", "Italy", "Kenya", "Myanmar", "Colombia",
    "South Korea", "Uganda", "Sudan", "Spain", "Argentina", "Algeria", "Iraq",
    "Afghanistan", "Poland", "Canada", "Morocco", "Saudi Arabia", "Ukraine", "Angola",
    "Uzbekistan", "Yemen", "Peru", "Malaysia", "Ghana", "Mozambique", "Nepal",
    "Madagascar", "Ivory Coast", "Venezuela", "Cameroon", "Niger", "Australia",
    "North Korea", "Taiwan", "Mali", "Burkina Faso", "Syria", "Sri Lanka", "Malawi",
    "Zambia", "Romania", "Chile", "Kazakhstan", "Chad", "Ecuador", "Somalia",
    "Guatemala", "Senegal", "Netherlands", "Cambodia", "Zimbabwe", "Guinea", "Rwanda",
    "Benin", "Burundi", "Tunisia", "Bolivia", "Haiti", "Belgium", "Jordan",
    "Dominican Republic", "Cuba", "South Sudan", "Sweden", "Honduras", "Czech Republic",
    "Azerbaijan", "Greece", "Papua New Guinea", "Portugal", "Hungary", "Tajikistan",
    "United Arab Emirates", "Belarus", "Israel", "Togo", "Austria", "Switzerland",
    "Sierra Leone", "Laos", "Hong Kong", "Serbia", "Nicaragua", "Libya", "Paraguay",
    "Kyrgyzstan", "Bulgaria", "Turkmenistan", "El Salvador", "Republic of the Congo",
    "Singapore", "Denmark", "Slovakia", "Central African Republic", "Finland", "Norway",
    "Liberia", "Palestine", "Lebanon", "New Zealand", "Costa Rica", "Ireland",
    "Mauritania", "Oman", "Panama", "Kuwait", "Croatia", "Eritrea", "Georgia",
    "Mongolia", "Moldova", "Uruguay", "Puerto Rico", "Bosnia and Herzegovina",
    "Albania", "Jamaica", "Armenia", "Gambia", "Lithuania", "Qatar", "Botswana",
    "Namibia", "Gabon", "Lesotho", "Guinea-Bissau", "Slovenia", "North Macedonia",
    "Latvia", "Equatorial Guinea", "Trinidad and Tobago", "Bahrain", "Timor-Leste",
    "Estonia", "Mauritius", "Cyprus", "Eswatini", "Djibouti", "Reunion", "Fiji",
    "Comoros", "Guyana", "Bhutan", "Solomon Islands", "Macau", "Luxembourg",
    "Montenegro", "Western Sahara", "Suriname", "Cape Verde", "Malta", "Maldives",
    "Brunei", "Belize", "Bahamas", "Guadeloupe", "Iceland", "Martinique", "Mayotte",
    "Vanuatu", "French Guiana", "French Polynesia", "New Caledonia", "Barbados",
    "Sao Tome and Principe", "Samoa", "Curacao", "Saint Lucia", "Guam", "Kiribati",
    "Grenada", "Micronesia", "Jersey", "Seychelles", "Tonga", "Aruba",
    "Saint Vincent and the Grenadines", "United States Virgin Islands",
    "Antigua and Barbuda", "Isle of Man", "Andorra", "Dominica", "Cayman Islands",
    "Bermuda", "Guernsey", "Greenland", "Faroe Islands", "Northern Mariana Islands",
    "Saint Kitts and Nevis", "Turks and Caicos Islands", "Sint Maarten",
    "American Samoa", "Marshall Islands", "Liechtenstein", "Monaco", "San Marino",
    "Gibraltar", "Saint Martin", "British Virgin Islands", "Palau", "Cook Islands",
    "Anguilla", "Nauru", "Wallis and Futuna", "Tuvalu", "Saint Barthelemy",
    "Saint Pierre and Miquelon", "Montserrat", "Falkland Islands", "Niue", "Tokelau",
    "Vatican City", "Kosovo",
];

#[test]
fn every_dataset_country_is_on_the_map() {
    let missing: Vec<&str> = DATASET_COUNTRIES
        .iter()
        .copied()
        .filter(|name| lookup(name).is_none())
        .collect();
    assert!(missing.is_empty(), "Unmapped countries: {missing:?}");
}

#[test]
fn every_bundled_country_is_on_the_map() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_DATA_PATH);
    let table = load_table(&path).unwrap();
    for country in table.countries() {
        assert!(lookup(country).is_some(), "{country} missing from registry");
    }
}

#[test]
fn selecting_every_bundled_country_builds_the_view() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_DATA_PATH);
    let table = load_table(&path).unwrap();
    let sel = Selection::from_names(table.countries());
    let view = DashboardView::build(&table, &sel, LineAxis::Place)
        .unwrap()
        .unwrap();
    assert_eq!(view.map.len(), table.len());
    assert_eq!(view.bars.len(), table.len());
}

#[test]
fn smaller_countries_keep_every_chart() {
    let table = read_table(
        "\
country,place,pop1980,pop2000,pop2010,pop2022,pop2023,landAreaKm
India,356,696828385,1059633675,1240613620,1417173173,1428627663,2973190
Guatemala,320,7319000,11589761,14543121,17843908,18092026,107160
Cambodia,116,6693764,12118841,14363532,16767842,16944826,176520
"
        .as_bytes(),
    )
    .unwrap();

    for other in ["Guatemala", "Cambodia"] {
        let sel = Selection::from_names(["India", other]);
        let view = DashboardView::build(&table, &sel, LineAxis::Place)
            .unwrap()
            .unwrap();
        assert_eq!(view.bars.len(), 2);
        assert_eq!(view.map.len(), 2);
    }
}
