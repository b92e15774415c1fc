/// Build the fixed summarization prompt. The transcript is embedded verbatim
/// between the reasoning and response delimiters; the closing `</response>`
/// tag is the engine's stop sequence.
pub fn build_summary_prompt(transcript: &str) -> String {
    format!(
        "<think>\n\
         You are a smart assistant. Given this meeting transcript, summarize \
         the key points and action items with deadlines and owners.\n\
         \n\
         Transcript:\n\
         {transcript}\n\
         </think>\n\
         <response>\n"
    )
}
