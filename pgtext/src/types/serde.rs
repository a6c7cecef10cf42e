use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::value::{Circle, Path, Point, Polygon, Segment, Value};

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(int) => serializer.serialize_i64(*int),
            Value::Float(float) => serializer.serialize_f64(*float),
            Value::Text(text) => serializer.serialize_str(text),
            Value::Sequence(items) => serializer.collect_seq(items),
            Value::Point(p) => p.serialize(serializer),
            Value::Segment(s) => s.serialize(serializer),
            Value::Path(p) => p.serialize(serializer),
            Value::Polygon(p) => p.serialize(serializer),
            Value::Circle(c) => c.serialize(serializer),
        }
    }
}

impl Serialize for Point {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Point", 2)?;
        s.serialize_field("x", &self.x)?;
        s.serialize_field("y", &self.y)?;
        s.end()
    }
}

impl Serialize for Segment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Segment", 2)?;
        s.serialize_field("a", &self.a)?;
        s.serialize_field("b", &self.b)?;
        s.end()
    }
}

impl Serialize for Path {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Path", 2)?;
        s.serialize_field("points", &self.points)?;
        s.serialize_field("closed", &self.closed)?;
        s.end()
    }
}

impl Serialize for Polygon {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Polygon", 1)?;
        s.serialize_field("points", &self.points)?;
        s.end()
    }
}

impl Serialize for Circle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Circle", 2)?;
        s.serialize_field("center", &self.center)?;
        s.serialize_field("radius", &self.radius)?;
        s.end()
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use crate::value::{Point, Value};

    #[test]
    fn value_to_json() {
        let value = Value::Sequence(vec![
            Value::Null,
            Value::Integer(3),
            Value::text("hi"),
            Value::Point(Point::new(1.5, -2.0)),
        ]);
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            json!([null, 3, "hi", { "x": 1.5, "y": -2.0 }]),
        );
    }
}
