pub(crate) mod pause;
pub(crate) mod play;
pub(crate) mod queue;
pub(crate) mod resume;
pub(crate) mod skip;
pub(crate) mod stop;

pub(crate) mod utils;

use crate::{CommandResult, Context};
use poise::CreateReply;
