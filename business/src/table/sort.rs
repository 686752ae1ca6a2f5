use std::cmp::Ordering;

use serde_json::Value;

use super::value::resolve;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Active sort column and direction. Starts unsorted, ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    /// Header click on `key`: the active key flips direction, any other key
    /// becomes active in ascending order.
    pub fn click(&mut self, key: &str) {
        if self.key.as_deref() == Some(key) {
            self.direction = self.direction.toggled();
        } else {
            self.key = Some(key.to_owned());
            self.direction = SortDirection::Ascending;
        }
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.key.as_deref() == Some(key)
    }
}

/// Ordering between two defined values.
///
/// Strings compare case-folded first and by code point on ties, numbers and
/// booleans by natural order. Values of different kinds are equal.
pub fn compare_defined(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::String(a), Value::String(b)) => a
            .to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b)),
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

/// Stable ordering of `rows` by `key`, as indices into `rows`.
///
/// Undefined values go last in both directions.
pub fn sort_order(rows: &[Value], key: &str, direction: SortDirection) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();
    order.sort_by(|&i, &j| {
        match (resolve(&rows[i], key), resolve(&rows[j], key)) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => {
                let ordering = compare_defined(a, b);
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            }
        }
    });
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows() -> Vec<Value> {
        vec![
            json!({ "id": 1, "name": "beta", "order": 2 }),
            json!({ "id": 2, "name": null, "order": 1 }),
            json!({ "id": 3, "name": "Alpha", "order": 2 }),
            json!({ "id": 4, "order": 1 }),
            json!({ "id": 5, "name": "alpha", "order": 2 }),
        ]
    }

    #[test]
    fn click_cycles_direction_and_resets_on_new_key() {
        let mut sort = SortState::default();
        sort.click("name");
        assert_eq!(sort.direction, SortDirection::Ascending);
        sort.click("name");
        assert_eq!(sort.direction, SortDirection::Descending);
        sort.click("order");
        assert_eq!(sort.key.as_deref(), Some("order"));
        assert_eq!(sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn equal_values_keep_input_order() {
        let order = sort_order(&rows(), "order", SortDirection::Ascending);
        assert_eq!(order, vec![1, 3, 0, 2, 4]);

        let order = sort_order(&rows(), "order", SortDirection::Descending);
        assert_eq!(order, vec![0, 2, 4, 1, 3]);
    }

    #[test]
    fn undefined_sorts_last_in_both_directions() {
        let asc = sort_order(&rows(), "name", SortDirection::Ascending);
        assert_eq!(asc, vec![2, 4, 0, 1, 3]);

        let desc = sort_order(&rows(), "name", SortDirection::Descending);
        assert_eq!(desc, vec![0, 4, 2, 1, 3]);
    }

    #[test]
    fn toggling_twice_restores_the_order() {
        let mut sort = SortState::default();
        sort.click("name");
        let first = sort_order(&rows(), "name", sort.direction);
        sort.click("name");
        sort.click("name");
        assert_eq!(sort_order(&rows(), "name", sort.direction), first);
    }

    #[test]
    fn mixed_kinds_compare_equal() {
        assert_eq!(compare_defined(&json!("1"), &json!(1)), Ordering::Equal);
        assert_eq!(compare_defined(&json!(false), &json!(true)), Ordering::Less);
        assert_eq!(compare_defined(&json!(2.5), &json!(10)), Ordering::Less);
    }
}
