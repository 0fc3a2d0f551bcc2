pub fn render_index() -> String {
    INDEX_HTML.to_string()
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef4f0;
      --bg-2: #cde5d4;
      --ink: #24302a;
      --accent: #2d9a5f;
      --accent-2: #2f4858;
      --danger: #c63b2b;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e3f0e5 60%, #f2f7f0 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5c665f;
      font-size: 1rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #7f8a82;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .delta {
      font-size: 0.85rem;
      color: #7f8a82;
    }

    .habits {
      display: grid;
      gap: 10px;
    }

    .habit {
      display: flex;
      align-items: center;
      gap: 14px;
      background: white;
      border-radius: 16px;
      padding: 14px 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .habit input[type="checkbox"] {
      width: 22px;
      height: 22px;
      accent-color: var(--accent);
    }

    .habit .name {
      font-weight: 600;
    }

    .habit .meta {
      font-size: 0.85rem;
      color: #7f8a82;
    }

    .habit .spacer {
      flex: 1;
    }

    .habit button {
      background: transparent;
      border: none;
      color: var(--danger);
      font-size: 0.9rem;
      cursor: pointer;
    }

    form.add {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
      align-items: center;
    }

    form.add input, form.add select {
      padding: 10px 14px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      font-size: 0.95rem;
      font-family: inherit;
    }

    form.add input[name="name"] {
      flex: 1;
      min-width: 180px;
    }

    form.add button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 22px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--danger);
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Habit Tracker</h1>
      <p class="subtitle">Mark today's habits done and watch your streaks grow.</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Completion rate</span>
        <span class="value" id="rate">0%</span>
        <span class="delta" id="rate-delta"></span>
      </div>
      <div class="stat">
        <span class="label">Current streak</span>
        <span class="value" id="current-streak">0</span>
      </div>
      <div class="stat">
        <span class="label">Longest streak</span>
        <span class="value" id="longest-streak">0</span>
      </div>
      <div class="stat">
        <span class="label">Completions (30d)</span>
        <span class="value" id="total">0</span>
        <span class="delta" id="total-delta"></span>
      </div>
    </section>

    <section>
      <div class="habits" id="habits"></div>
    </section>

    <form class="add" id="add-form">
      <input name="name" placeholder="New habit" autocomplete="off" required />
      <select name="frequency">
        <option>Daily</option>
        <option>Weekly</option>
        <option value="Mon, Wed, Fri">Mon, Wed, Fri</option>
      </select>
      <input name="reminderTime" type="time" />
      <button type="submit">Add habit</button>
    </form>

    <div class="status" id="status"></div>
  </main>

  <script>
    const habitsEl = document.getElementById('habits');
    const statusEl = document.getElementById('status');
    const addForm = document.getElementById('add-form');

    let habits = [];

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const todayString = () => {
      const now = new Date();
      const pad = (n) => String(n).padStart(2, '0');
      return `${now.getFullYear()}-${pad(now.getMonth() + 1)}-${pad(now.getDate())}`;
    };

    const signed = (n) => (n > 0 ? `+${n}` : `${n}`);

    const renderStats = (stats) => {
      document.getElementById('rate').textContent = `${stats.completionRate}%`;
      document.getElementById('rate-delta').textContent =
        `${signed(stats.completionRateChange)}% vs previous 30 days`;
      document.getElementById('current-streak').textContent = stats.currentStreak;
      document.getElementById('longest-streak').textContent = stats.longestStreak;
      document.getElementById('total').textContent = stats.totalCompletions;
      document.getElementById('total-delta').textContent =
        `${signed(stats.totalCompletionsChange)} vs previous 30 days`;
    };

    const renderHabits = () => {
      habitsEl.innerHTML = '';
      for (const habit of habits) {
        const row = document.createElement('div');
        row.className = 'habit';

        const checkbox = document.createElement('input');
        checkbox.type = 'checkbox';
        checkbox.checked = habit.completed;
        checkbox.addEventListener('change', () => toggle(habit, checkbox));

        const name = document.createElement('span');
        name.className = 'name';
        name.textContent = habit.name;

        const meta = document.createElement('span');
        meta.className = 'meta';
        meta.textContent = habit.reminderTime
          ? `${habit.frequency} · ${habit.reminderTime}`
          : habit.frequency;

        const spacer = document.createElement('span');
        spacer.className = 'spacer';

        const del = document.createElement('button');
        del.type = 'button';
        del.textContent = 'Delete';
        del.addEventListener('click', () => removeHabit(habit, row));

        row.append(checkbox, name, meta, spacer, del);
        habitsEl.appendChild(row);
      }
    };

    const loadToday = async () => {
      const res = await fetch('/api/today');
      if (!res.ok) {
        throw new Error('Unable to load habits');
      }
      habits = await res.json();
      renderHabits();
    };

    const loadStats = async () => {
      const res = await fetch('/api/stats');
      if (!res.ok) {
        throw new Error('Unable to load stats');
      }
      renderStats(await res.json());
    };

    const refresh = async () => {
      await Promise.all([loadToday(), loadStats()]);
    };

    // Flip the checkbox immediately; put it back and resync if the
    // request fails.
    const toggle = async (habit, checkbox) => {
      const completed = checkbox.checked;
      habit.completed = completed;
      try {
        const res = completed
          ? await fetch('/api/completions', {
              method: 'POST',
              headers: { 'content-type': 'application/json' },
              body: JSON.stringify({ habitId: habit.id, date: todayString() })
            })
          : await fetch(`/api/completions/${habit.id}/${todayString()}`, { method: 'DELETE' });
        if (!res.ok) {
          throw new Error(await res.text() || 'Request failed');
        }
        loadStats().catch((err) => setStatus(err.message, 'error'));
      } catch (err) {
        habit.completed = !completed;
        checkbox.checked = !completed;
        setStatus(`Failed to update habit: ${err.message}`, 'error');
        refresh().catch(() => {});
      }
    };

    const removeHabit = async (habit, row) => {
      row.remove();
      habits = habits.filter((h) => h.id !== habit.id);
      try {
        const res = await fetch(`/api/habits/${habit.id}`, { method: 'DELETE' });
        if (!res.ok) {
          throw new Error(await res.text() || 'Request failed');
        }
        loadStats().catch(() => {});
      } catch (err) {
        setStatus(`Failed to delete habit: ${err.message}`, 'error');
        refresh().catch(() => {});
      }
    };

    addForm.addEventListener('submit', async (event) => {
      event.preventDefault();
      const form = new FormData(addForm);
      const body = {
        name: form.get('name'),
        frequency: form.get('frequency'),
        reminderTime: form.get('reminderTime') || null
      };
      try {
        const res = await fetch('/api/habits', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify(body)
        });
        if (!res.ok) {
          throw new Error(await res.text() || 'Request failed');
        }
        addForm.reset();
        await refresh();
        setStatus('Habit added', 'ok');
        setTimeout(() => setStatus('', ''), 1200);
      } catch (err) {
        setStatus(`Failed to add habit: ${err.message}`, 'error');
      }
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
