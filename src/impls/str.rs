use crate::{Error, Reducible, Sink, Step, Transformer};

impl<'a> Reducible for &'a str {
    type Item = char;

    fn kind(&self) -> &'static str {
        "string"
    }

    fn fold_with<X>(self, transformer: &mut X, acc: X::Acc) -> Result<Step<X::Acc>, Error>
    where
        X: Transformer<char>,
    {
        Ok(transformer.step_iter(acc, self.chars()))
    }
}

impl Reducible for String {
    type Item = char;

    fn kind(&self) -> &'static str {
        "string"
    }

    fn fold_with<X>(self, transformer: &mut X, acc: X::Acc) -> Result<Step<X::Acc>, Error>
    where
        X: Transformer<char>,
    {
        self.as_str().fold_with(transformer, acc)
    }
}

impl Sink<char> for String {
    fn append(&mut self, item: char) {
        self.push(item);
    }
}

impl<'a> Sink<&'a str> for String {
    fn append(&mut self, item: &'a str) {
        self.push_str(item);
    }
}

impl Sink<String> for String {
    fn append(&mut self, item: String) {
        self.push_str(&item);
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn string_source_yields_chars() {
        let out = into(String::new(), filter(|c: &char| !c.is_whitespace()), "a b  c").unwrap();

        assert_eq!(out, "abc");
    }

    #[test]
    fn string_sink_concatenates() {
        let words = vec!["foo", "bar"];
        let out = into(String::from("> "), map(|w: &str| w.to_uppercase()), words).unwrap();

        assert_eq!(out, "> FOOBAR");
    }

    #[test]
    fn multibyte_chars_stay_whole() {
        let out = into(Vec::new(), identity(), String::from("añ€")).unwrap();

        assert_eq!(out, vec!['a', 'ñ', '€']);
    }
}
