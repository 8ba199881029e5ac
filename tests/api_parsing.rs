use wbc_rs::models::{ResponseHeader, map_country_page, map_population_page};

#[test]
fn parse_sample_country_payload() {
    let sample = r#"
    [
      {"page":1,"pages":1,"per_page":"500","total":2},
      [
        {
          "id":"ABW",
          "iso2Code":"AW",
          "name":"Aruba",
          "region":{"id":"LCN","value":"Latin America & Caribbean "},
          "adminregion":{"id":"","value":""},
          "incomeLevel":{"id":"HIC","value":"High income"},
          "lendingType":{"id":"LNX","value":"Not classified"},
          "capitalCity":"Oranjestad",
          "longitude":"-70.0167",
          "latitude":"12.5167"
        },
        {
          "id":"AFG",
          "iso2Code":"AF",
          "name":"Afghanistan",
          "region":{"id":"SAS","value":"South Asia"},
          "incomeLevel":{"id":"LIC","value":"Low income"},
          "capitalCity":"Kabul",
          "longitude":"69.1761",
          "latitude":"34.5228"
        }
      ]
    ]
    "#;

    let v: serde_json::Value = serde_json::from_str(sample).unwrap();
    let arr = v.as_array().unwrap();
    let header: ResponseHeader = serde_json::from_value(arr[0].clone()).unwrap();
    assert_eq!(header.page, 1);
    assert_eq!(header.pages, 1);
    assert_eq!(header.per_page, "500");
    assert_eq!(header.total, 2);

    let countries = map_country_page(arr[1].as_array().unwrap());
    assert_eq!(countries.len(), 2);
    assert_eq!(countries[0].name, "Aruba");
    assert_eq!(countries[0].region.value, "Latin America & Caribbean ");
    assert_eq!(countries[0].longitude, -70.0167);
    // Second record omits adminregion/lendingType; those default to empty.
    assert_eq!(countries[1].admin_region.id, "");
    assert_eq!(countries[1].lending_type.value, "");
    assert_eq!(countries[1].income_level.id, "LIC");
}

#[test]
fn parse_sample_population_payload() {
    let sample = r#"
    [
      {"page":51,"pages":53,"per_page":"50","total":2640},
      [
        {"indicator":{"id":"SP.POP.TOTL","value":"Population, total"},
         "country":{"id":"UA","value":"Ukraine"},"value":null,"decimal":"0","date":"2016"},
        {"indicator":{"id":"SP.POP.TOTL","value":"Population, total"},
         "country":{"id":"UA","value":"Ukraine"},"value":"45154029","decimal":"0","date":"2015"}
      ]
    ]
    "#;

    let v: serde_json::Value = serde_json::from_str(sample).unwrap();
    let arr = v.as_array().unwrap();
    let header: ResponseHeader = serde_json::from_value(arr[0].clone()).unwrap();
    assert_eq!(header.pages, 53);
    assert_eq!(header.total, 2640);

    let observations = map_population_page(arr[1].as_array().unwrap());
    assert_eq!(observations.len(), 2);
    assert_eq!(observations[0].country_id, "UA");
    assert_eq!(observations[0].country_name, "Ukraine");
    assert_eq!(observations[0].value, 0);
    assert_eq!(observations[0].year, "2016");
    assert_eq!(observations[1].value, 45_154_029);
    assert_eq!(observations[1].year, "2015");
}
