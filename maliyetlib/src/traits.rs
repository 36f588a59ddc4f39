//! Унифицированный кодек хранимого текстового поля: значение <-> одна строка.

/// `decode` не возвращает ошибок: каждая битая часть локально заменяется
/// нулём, форма должна оставаться редактируемой на любых данных.
pub trait FieldCodec {
    type Value;

    fn encode(v: &Self::Value) -> String;
    fn decode(s: &str) -> Self::Value;
}
