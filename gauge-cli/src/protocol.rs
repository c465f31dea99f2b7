//! Request/response types and method dispatch

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};

use gauge::{
    CompoundFormatType, CompoundMeasurement, CompoundOptions, ConversionRequest, ErrorReport,
    Gauge, GaugeError, SearchFilter, Unit, UnitInfo,
};

const DEFAULT_POPULAR_LIMIT: usize = 6;

#[derive(Debug, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub id: Option<JsonValue>,
    pub method: String,
    #[serde(default)]
    pub params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub id: JsonValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

impl Response {
    pub fn ok(id: Option<JsonValue>, result: JsonValue) -> Self {
        Response {
            id: id.unwrap_or(JsonValue::Null),
            result: Some(result),
            error: None,
        }
    }

    pub fn err(id: Option<JsonValue>, error: &GaugeError) -> Self {
        Response {
            id: id.unwrap_or(JsonValue::Null),
            result: None,
            error: Some(error.report()),
        }
    }

    /// Malformed request line
    pub fn parse_error(details: impl std::fmt::Display) -> Self {
        Self::err(None, &GaugeError::invalid_input(format!("Parse error: {}", details)))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompoundParams {
    measurement: CompoundMeasurement,
    target_unit_ids: Vec<String>,
    #[serde(default)]
    options: CompoundOptions,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParseParams {
    input: String,
    format_type: CompoundFormatType,
    #[serde(default)]
    target_unit_ids: Option<Vec<String>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FormatParams {
    measurement: CompoundMeasurement,
    format_type: CompoundFormatType,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchParams {
    query: String,
    #[serde(default)]
    limit: Option<usize>,
    #[serde(default)]
    filter: Option<SearchFilter>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UnitParams {
    category_id: String,
    #[serde(default)]
    unit_id: Option<String>,
    #[serde(default)]
    limit: Option<usize>,
}

fn params<T: DeserializeOwned>(params: &Option<JsonValue>) -> Result<T, GaugeError> {
    let value = params.clone().unwrap_or_else(|| json!({}));
    serde_json::from_value(value).map_err(|e| GaugeError::invalid_input(format!("Invalid params: {}", e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<JsonValue, GaugeError> {
    serde_json::to_value(value).map_err(|e| GaugeError::invalid_input(e.to_string()))
}

fn unit_infos(units: &[Unit]) -> Vec<UnitInfo> {
    units.iter().map(Unit::info).collect()
}

pub async fn handle_request(gauge: &Gauge, request: &Request) -> Response {
    match dispatch(gauge, request).await {
        Ok(result) => Response::ok(request.id.clone(), result),
        Err(e) => Response::err(request.id.clone(), &e),
    }
}

async fn dispatch(gauge: &Gauge, request: &Request) -> Result<JsonValue, GaugeError> {
    match request.method.as_str() {
        "convert" => {
            let req: ConversionRequest = params(&request.params)?;
            to_json(&gauge.convert_request(&req).await?)
        }
        "convert_compound" => {
            let p: CompoundParams = params(&request.params)?;
            to_json(&gauge.convert_compound(&p.measurement, &p.target_unit_ids, &p.options).await?)
        }
        "parse_compound" => {
            let p: ParseParams = params(&request.params)?;
            match p.target_unit_ids {
                Some(ids) => to_json(&gauge.parse_and_convert(&p.input, p.format_type, Some(&ids)).await?),
                None => {
                    let Some(measurement) = gauge.parse_compound_input(&p.input, p.format_type).await else {
                        return Ok(JsonValue::Null);
                    };
                    let formatted = gauge.format_compound_measurement(&measurement, p.format_type).await;
                    Ok(json!({ "formatted": formatted, "measurement": measurement }))
                }
            }
        }
        "format_compound" => {
            let p: FormatParams = params(&request.params)?;
            Ok(json!(gauge.format_compound_measurement(&p.measurement, p.format_type).await))
        }
        "search" => {
            let p: SearchParams = params(&request.params)?;
            to_json(&gauge.search_units(&p.query, p.limit, p.filter.as_ref()))
        }
        "categories" => to_json(&gauge.categories()),
        "compatible_units" => {
            let p: UnitParams = params(&request.params)?;
            let unit_id = p
                .unit_id
                .ok_or_else(|| GaugeError::invalid_input("Missing 'unitId'"))?;
            let units = gauge.compatible_units(&p.category_id, &unit_id).await?;
            to_json(&unit_infos(&units))
        }
        "popular_units" => {
            let p: UnitParams = params(&request.params)?;
            let limit = p.limit.unwrap_or(DEFAULT_POPULAR_LIMIT);
            let units = gauge.popular_units(&p.category_id, limit).await?;
            to_json(&unit_infos(&units))
        }
        other => Err(GaugeError::invalid_input(format!("Method not found: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn call(gauge: &Gauge, line: &str) -> JsonValue {
        let request: Request = serde_json::from_str(line).unwrap();
        serde_json::to_value(handle_request(gauge, &request).await).unwrap()
    }

    #[tokio::test]
    async fn test_convert() {
        let gauge = Gauge::with_standard_library();
        let response = call(
            &gauge,
            r#"{"id":1,"method":"convert","params":{"value":"100","categoryId":"temperature","fromUnitId":"celsius","toUnitId":"fahrenheit"}}"#,
        )
        .await;
        assert_eq!(response["id"], 1);
        assert_eq!(response["result"]["value"], 212.0);
        assert_eq!(response["result"]["formattedValue"], "212.0");
        assert!(response.get("error").is_none());
    }

    #[tokio::test]
    async fn test_error_report() {
        let gauge = Gauge::with_standard_library();
        let response = call(
            &gauge,
            r#"{"id":"a","method":"convert","params":{"value":1,"categoryId":"length","fromUnitId":"meter","toUnitId":"league"}}"#,
        )
        .await;
        assert_eq!(response["id"], "a");
        assert_eq!(response["error"]["code"], "UNIT_NOT_FOUND");
        assert!(response["error"]["suggestion"].is_string());
    }

    #[tokio::test]
    async fn test_parse_compound() {
        let gauge = Gauge::with_standard_library();
        let response = call(
            &gauge,
            r#"{"id":2,"method":"parse_compound","params":{"input":"5 cups 2 tbsp","formatType":"COOKING"}}"#,
        )
        .await;
        assert_eq!(response["result"]["formatted"], "5 cup 2 tbsp");
        assert_eq!(response["result"]["measurement"]["components"][1]["unitId"], "tablespoon_us");

        let response = call(
            &gauge,
            r#"{"id":3,"method":"parse_compound","params":{"input":"70 in","formatType":"HEIGHT","targetUnitIds":["foot","inch"]}}"#,
        )
        .await;
        assert_eq!(response["result"]["formatted"], "5 ft 10 in");

        let response = call(
            &gauge,
            r#"{"id":4,"method":"parse_compound","params":{"input":"tall","formatType":"HEIGHT"}}"#,
        )
        .await;
        assert!(response["result"].is_null());
    }

    #[tokio::test]
    async fn test_convert_and_format_compound() {
        let gauge = Gauge::with_standard_library();
        let response = call(
            &gauge,
            r#"{"id":5,"method":"convert_compound","params":{"measurement":{"categoryId":"time","components":[{"value":5025,"unitId":"second"}]},"targetUnitIds":["hour","minute","second"],"options":{"formatType":"DURATION"}}}"#,
        )
        .await;
        assert_eq!(response["result"]["formatted"], "1 h 23 min 45 s");

        let response = call(
            &gauge,
            r#"{"id":6,"method":"format_compound","params":{"measurement":{"categoryId":"mass","components":[{"value":7,"unitId":"pound"},{"value":4,"unitId":"ounce"}]},"formatType":"WEIGHT"}}"#,
        )
        .await;
        assert_eq!(response["result"], "7 lb 4 oz");
    }

    #[tokio::test]
    async fn test_huge_precision_does_not_abort() {
        let gauge = Gauge::with_standard_library();
        let response = call(
            &gauge,
            r#"{"id":10,"method":"convert","params":{"value":1,"categoryId":"length","fromUnitId":"meter","toUnitId":"foot","options":{"precision":70000}}}"#,
        )
        .await;
        assert_eq!(response["result"]["precision"], 10);
        assert_eq!(response["result"]["formattedValue"], "3.280839895");
    }

    #[tokio::test]
    async fn test_units_and_search() {
        let gauge = Gauge::with_standard_library();
        let response = call(
            &gauge,
            r#"{"id":7,"method":"popular_units","params":{"categoryId":"mass","limit":2}}"#,
        )
        .await;
        assert_eq!(response["result"][0]["id"], "kilogram");
        assert_eq!(response["result"].as_array().unwrap().len(), 2);

        let response = call(&gauge, r#"{"id":8,"method":"search","params":{"query":"pound"}}"#).await;
        assert_eq!(response["result"][0]["unitId"], "pound");

        let response = call(
            &gauge,
            r#"{"id":9,"method":"compatible_units","params":{"categoryId":"mass"}}"#,
        )
        .await;
        assert_eq!(response["error"]["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let gauge = Gauge::with_standard_library();
        let response = call(&gauge, r#"{"method":"teleport"}"#).await;
        assert!(response["id"].is_null());
        assert_eq!(response["error"]["code"], "INVALID_INPUT");
    }
}
