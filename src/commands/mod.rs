/*!
Command handlers for the CLI

This module provides the handler invoked by the CLI entrypoint. The
handler is intentionally small and wires the library components
together: the Storyblok client, the OpenAI provider, and the pipeline.
*/

pub mod generate;
