pub mod interview_prompt;
