//! Source file generators: entry point, example command, event handlers,
//! and the logger utility.
//!
//! Import paths and file extensions follow the configured language variant
//! so the generated files reference each other consistently.

use super::meta::TOKEN_ENV_KEY;
use super::GeneratedFile;
use crate::config::{Language, ProjectConfig};

/// Produces the bootstrap file `src/index.<ext>`.
///
/// The generated code constructs the client, loads environment variables,
/// enumerates command and event files by the variant's extension at runtime,
/// registers each by its declared name, and logs in with the token from the
/// environment.
pub fn entry_point(config: &ProjectConfig) -> GeneratedFile {
    let ext = config.language.file_ext();
    let commands_augmentation = match config.language {
        Language::JavaScript => "",
        Language::TypeScript => {
            "declare module \"discord.js\" {\n  export interface Client {\n    commands: Collection<string, any>;\n  }\n}\n\n"
        }
    };

    let content = format!(
        r#"import {{ Client, Collection, GatewayIntentBits }} from "discord.js";

import {{ readdirSync }} from 'fs';
import {{ join }} from 'path';
import dotenv from 'dotenv';
import {{ logger }} from './utils/logger.{ext}';

dotenv.config();

{commands_augmentation}const client = new Client({{
  intents: [
    GatewayIntentBits.Guilds,
    GatewayIntentBits.GuildMessages,
    GatewayIntentBits.MessageContent,
  ],
}});

client.commands = new Collection();

// Load commands
const commandsPath = join(__dirname, 'commands');
const commandFiles = readdirSync(commandsPath).filter(file => file.endsWith('.{ext}'));

for (const file of commandFiles) {{
  const filePath = join(commandsPath, file);
  import(filePath).then((command) => {{
    if ('default' in command && 'execute' in command.default) {{
      client.commands.set(command.default.name, command.default);
      logger.info(`Loaded command: ${{command.default.name}}`);
    }}
  }});
}}

// Load events
const eventsPath = join(__dirname, 'events');
const eventFiles = readdirSync(eventsPath).filter(file => file.endsWith('.{ext}'));

for (const file of eventFiles) {{
  const filePath = join(eventsPath, file);
  import(filePath).then((event) => {{
    if ('default' in event) {{
      if (event.default.once) {{
        client.once(event.default.name, (...args) => event.default.execute(...args));
      }} else {{
        client.on(event.default.name, (...args) => event.default.execute(...args));
      }}
      logger.info(`Loaded event: ${{event.default.name}}`);
    }}
  }});
}}

client.login(process.env.{TOKEN_ENV_KEY});
"#
    );

    GeneratedFile::text(format!("src/index.{ext}"), content)
}

/// Produces the example command `src/commands/ping.<ext>`.
/// Export shape follows the variant: `export default` for TypeScript,
/// `module.exports` for JavaScript.
pub fn ping_command(config: &ProjectConfig) -> GeneratedFile {
    let content = match config.language {
        Language::JavaScript => {
            r#"// No imports needed for JavaScript

module.exports = {
  name: 'ping',
  description: 'Replies with Pong!',
  async execute(interaction) {
    await interaction.reply('Pong!');
  },
};
"#
        }
        Language::TypeScript => {
            r#"import { CommandInteraction } from 'discord.js';

export default {
  name: 'ping',
  description: 'Replies with Pong!',
  async execute(interaction: CommandInteraction) {
    await interaction.reply('Pong!');
  },
};
"#
        }
    };

    GeneratedFile::text(
        format!("src/commands/ping.{}", config.language.file_ext()),
        content,
    )
}

/// Produces the `src/events/ready.<ext>` handler, which logs the
/// successful login once.
pub fn ready_event(config: &ProjectConfig) -> GeneratedFile {
    let ext = config.language.file_ext();
    let (client_import, signature) = match config.language {
        Language::JavaScript => ("", "execute(client) {"),
        Language::TypeScript => {
            ("import { Client } from \"discord.js\";\n", "execute(client: Client): void {")
        }
    };

    let content = format!(
        r#"{client_import}import {{ logger }} from '../utils/logger.{ext}';

export default {{
  name: 'ready',
  once: true,
  {signature}
    logger.info(`Logged in as ${{client.user.tag}}!`);
  }},
}};
"#
    );

    GeneratedFile::text(format!("src/events/ready.{ext}"), content)
}

/// Produces the `src/events/interactionCreate.<ext>` handler.
///
/// The handler ignores non-command interactions, looks the command up in the
/// client registry, no-ops when absent, and runs it inside a try/catch that
/// logs the failure and sends an ephemeral error reply.
pub fn interaction_event(config: &ProjectConfig) -> GeneratedFile {
    let ext = config.language.file_ext();
    let (interaction_import, signature) = match config.language {
        Language::JavaScript => ("", "async execute(interaction) {"),
        Language::TypeScript => (
            "import { Interaction } from \"discord.js\";\n",
            "async execute(interaction: Interaction): Promise<void> {",
        ),
    };

    let content = format!(
        r#"{interaction_import}import {{ logger }} from '../utils/logger.{ext}';

export default {{
  name: 'interactionCreate',
  {signature}
    if (!interaction.isCommand()) return;

    const {{ commandName }} = interaction;
    const command = interaction.client.commands.get(commandName);

    if (!command) return;

    try {{
      await command.execute(interaction);
    }} catch (error) {{
      logger.error(`Error executing ${{commandName}}`);
      console.error(error);
      await interaction.reply({{
        content: 'There was an error executing this command!',
        ephemeral: true
      }});
    }}
  }},
}};
"#
    );

    GeneratedFile::text(format!("src/events/interactionCreate.{ext}"), content)
}

/// Produces the logger utility `src/utils/logger.<ext>` with info/warn/error
/// levels, each prefixing the message with its level tag.
pub fn logger_util(config: &ProjectConfig) -> GeneratedFile {
    let (level_type, annotation) = match config.language {
        Language::JavaScript => ("", ""),
        Language::TypeScript => {
            ("type LogLevel = \"info\" | \"warn\" | \"error\";\n\n", ": string")
        }
    };

    let content = format!(
        r#"{level_type}export const logger = {{
  info: (message{annotation}) => console.log(`[INFO] ${{message}}`),
  warn: (message{annotation}) => console.warn(`[WARN] ${{message}}`),
  error: (message{annotation}) => console.error(`[ERROR] ${{message}}`)
}};
"#
    );

    GeneratedFile::text(
        format!("src/utils/logger.{}", config.language.file_ext()),
        content,
    )
}
