//! In-memory host for scripted sessions and tests.

use std::collections::VecDeque;

use super::{InputLine, IoError, IoHost, Output, OutputStyle, PromptConfig, Signal};

/// Host with in-memory I/O buffers.
///
/// Input lines and signals are queued and consumed in order; output is
/// buffered for inspection. Once both queues are drained the host reports
/// [`Signal::Eof`], so a script that forgets `exit` still ends the loop.
#[derive(Debug, Default)]
pub struct TestHost {
    input_queue: VecDeque<String>,
    signal_queue: VecDeque<Signal>,
    output_buffer: Vec<Output>,
    prompts: Vec<PromptConfig>,
    flush_count: usize,
}

impl TestHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host that will feed `lines` to the REPL, in order.
    pub fn with_script(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut host = Self::new();
        host.queue_inputs(lines);
        host
    }

    pub fn queue_input(&mut self, line: impl Into<String>) {
        self.input_queue.push_back(line.into());
    }

    pub fn queue_inputs(&mut self, lines: impl IntoIterator<Item = impl Into<String>>) {
        for line in lines {
            self.queue_input(line);
        }
    }

    pub fn queue_signal(&mut self, signal: Signal) {
        self.signal_queue.push_back(signal);
    }

    pub fn output(&self) -> &[Output] {
        &self.output_buffer
    }

    /// All output text, one entry per line.
    pub fn output_text(&self) -> String {
        self.output_buffer
            .iter()
            .map(|o| o.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn output_with_style(&self, style: OutputStyle) -> Vec<&str> {
        self.output_buffer
            .iter()
            .filter(|o| o.style == style)
            .map(|o| o.text.as_str())
            .collect()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.output_with_style(OutputStyle::Error)
    }

    /// Every generated declaration the REPL printed.
    pub fn code(&self) -> Vec<&str> {
        self.output_with_style(OutputStyle::Code)
    }

    pub fn last_prompt(&self) -> Option<&PromptConfig> {
        self.prompts.last()
    }

    pub fn prompts(&self) -> &[PromptConfig] {
        &self.prompts
    }

    pub fn flush_count(&self) -> usize {
        self.flush_count
    }

    pub fn clear_output(&mut self) {
        self.output_buffer.clear();
    }

    pub fn has_pending_input(&self) -> bool {
        !self.input_queue.is_empty()
    }

    pub fn has_pending_signal(&self) -> bool {
        !self.signal_queue.is_empty()
    }
}

impl IoHost for TestHost {
    fn wait_for_input(&mut self) -> Result<(), IoError> {
        Ok(())
    }

    fn read_input(&mut self) -> Result<Option<InputLine>, IoError> {
        Ok(self.input_queue.pop_front().map(|line| InputLine { line }))
    }

    fn read_signal(&mut self) -> Result<Option<Signal>, IoError> {
        if let Some(signal) = self.signal_queue.pop_front() {
            return Ok(Some(signal));
        }
        if self.input_queue.is_empty() {
            return Ok(Some(Signal::Eof));
        }
        Ok(None)
    }

    fn write_output(&mut self, output: Output) -> Result<(), IoError> {
        self.output_buffer.push(output);
        Ok(())
    }

    fn write_prompt(&mut self, config: PromptConfig) -> Result<(), IoError> {
        self.prompts.push(config);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), IoError> {
        self.flush_count += 1;
        Ok(())
    }
}
