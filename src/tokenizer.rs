/// Split text into non-empty tokens on runs of whitespace.
///
/// This is the fallback tokenizer: purely a whitespace partition, no
/// punctuation splitting, no case or unicode normalization. Used both
/// for the token preview and as the default payload when the user
/// supplies no usable token list.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}
