use serde::{Deserialize, Serialize};
use serde_json::json;
use kp_utils::{dejsonify, jsonify, jsonify_pretty};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Sample {
    zeta: u32,
    alpha: Vec<u32>,
}

#[test]
fn test_jsonify_sorts_keys() {
    let sample = Sample {
        zeta: 3,
        alpha: vec![1, 2],
    };
    assert_eq!(jsonify(&sample).unwrap(), r#"{"alpha":[1,2],"zeta":3}"#);
}

#[test]
fn test_jsonify_sorts_nested_keys() {
    let value = json!({"b": [{"y": 1, "x": 2}], "a": {"d": 0, "c": 1}});
    assert_eq!(
        jsonify(&value).unwrap(),
        r#"{"a":{"c":1,"d":0},"b":[{"x":2,"y":1}]}"#
    );
}

#[test]
fn test_jsonify_pretty_keeps_order() {
    let sample = Sample {
        zeta: 3,
        alpha: vec![],
    };
    let pretty = jsonify_pretty(&sample).unwrap();
    assert!(pretty.find("alpha").unwrap() < pretty.find("zeta").unwrap());
}

#[test]
fn test_dejsonify() {
    let sample: Sample = dejsonify(r#"{"zeta":7,"alpha":[4]}"#).unwrap();
    assert_eq!(
        sample,
        Sample {
            zeta: 7,
            alpha: vec![4]
        }
    );
    assert!(dejsonify::<Sample>(r#"{"zeta":7}"#).is_err());
}
