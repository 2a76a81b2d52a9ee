//! Question and configuration fixtures

/// Question JSON with every field present
pub fn fixture_full_question_json() -> &'static str {
    r#"{
        "actions": "success",
        "headers": {"ipProtocols": ["tcp"], "dstPorts": "22", "srcIps": "10.0.0.0/8", "dstIps": null},
        "ignoreFilters": false,
        "maxTraces": 1,
        "pathConstraints": {
            "startLocation": "as1border1",
            "endLocation": "/core.*/",
            "transitLocations": "firewall",
            "forbiddenLocations": null
        }
    }"#
}

/// Versioned YAML config document
pub fn fixture_config_yaml(max_traces: i32, excluded: &[&str]) -> String {
    format!(
        "version: 1\ndefault_max_traces: {max_traces}\nexcluded_dispositions: [{}]\n",
        excluded.join(", ")
    )
}
